//! Stepwise iterative solver.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{HanoiState, MoveRecord, PoleId, PolesSnapshot, Relocation, SolveConfig};
use crate::error::HanoiError;
use crate::trace::MoveSink;

use super::cycle::{Cycle, CYCLE_LEN};

/// Optimal move count for `disks` disks: `2^disks - 1`.
///
/// Saturates at `u64::MAX` for 64 or more disks.
#[must_use]
pub fn expected_moves(disks: u32) -> u64 {
    if disks >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << disks) - 1
    }
}

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Disk count of the run.
    pub disks: u32,

    /// Moves made.
    pub moves: u64,

    /// Cycle used to drive the run.
    pub parity: Cycle,

    /// Final pole contents by caller label.
    pub final_poles: PolesSnapshot,
}

/// Iterative Hanoi solver.
///
/// Owns the per-run state and walks the selected cycle, making one legal
/// move per call to `next_move()`. Cycle steps that would not move a disk
/// are skipped silently.
///
/// ```
/// use hanoi_stack::core::SolveConfig;
/// use hanoi_stack::solver::HanoiSolver;
///
/// let solver = HanoiSolver::new(&SolveConfig::new(3, 0, 2)).unwrap();
/// let lines: Vec<String> = solver.map(|m| m.to_string()).collect();
///
/// assert_eq!(lines.len(), 7);
/// assert_eq!(lines[0], "Move disk from pole 0 to pole 2");
/// ```
#[derive(Clone, Debug)]
pub struct HanoiSolver {
    state: HanoiState,
    cycle: Cycle,
    /// Next position within the cycle.
    cursor: usize,
    moves: u64,
}

impl HanoiSolver {
    /// Validate `config` and set up a fresh run.
    pub fn new(config: &SolveConfig) -> Result<Self, HanoiError> {
        let state = HanoiState::new(config)?;
        let cycle = Cycle::for_disks(config.disks);

        debug!(
            disks = config.disks,
            source = config.source,
            destination = config.destination,
            %cycle,
            "starting solve"
        );

        Ok(Self {
            state,
            cycle,
            cursor: 0,
            moves: 0,
        })
    }

    /// Current puzzle state.
    #[must_use]
    pub fn state(&self) -> &HanoiState {
        &self.state
    }

    /// The cycle driving this run, picked by disk-count parity.
    #[must_use]
    pub fn parity(&self) -> Cycle {
        self.cycle
    }

    /// Moves made so far.
    #[must_use]
    pub fn moves_made(&self) -> u64 {
        self.moves
    }

    /// Is every disk on the destination pole?
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    /// Make the next move, or return `None` once solved.
    pub fn next_move(&mut self) -> Option<MoveRecord> {
        if self.state.is_solved() {
            return None;
        }

        let relocation = if self.state.disks() == 1 {
            self.state.move_between(PoleId::SOURCE, PoleId::DESTINATION)?
        } else {
            self.step_cycle()?
        };

        self.moves += 1;
        let record = relocation.labeled(self.moves, self.state.labels());
        trace!(
            step = record.step,
            from = %record.from,
            to = %record.to,
            disk = record.disk.raw(),
            "move"
        );
        Some(record)
    }

    /// Advance through the cycle until a pair yields a move.
    ///
    /// An unsolved position always has a disk off the destination pole, so
    /// one full pass is enough.
    fn step_cycle(&mut self) -> Option<Relocation> {
        for _ in 0..CYCLE_LEN {
            let (a, b) = self.cycle.pairs()[self.cursor];
            self.cursor = (self.cursor + 1) % CYCLE_LEN;

            if let Some(relocation) = self.state.move_between(a, b) {
                return Some(relocation);
            }
        }
        None
    }

    /// Drive the run to completion, reporting each move to `sink`.
    pub fn run<S: MoveSink + ?Sized>(mut self, sink: &mut S) -> Result<SolveReport, HanoiError> {
        while let Some(record) = self.next_move() {
            sink.record(&record)?;
        }
        sink.finish()?;

        if !self.state.is_solved() {
            return Err(HanoiError::InvariantViolated(format!(
                "solver stalled after {} moves with {} of {} disks on the destination",
                self.moves,
                self.state.pole(PoleId::DESTINATION).len(),
                self.state.disks()
            )));
        }

        debug!(disks = self.state.disks(), moves = self.moves, "solve complete");

        Ok(self.into_report())
    }

    /// Summarize the run in its current state.
    #[must_use]
    pub fn into_report(self) -> SolveReport {
        SolveReport {
            disks: u32::from(self.state.disks()),
            moves: self.moves,
            parity: self.cycle,
            final_poles: self.state.snapshot(),
        }
    }
}

impl Iterator for HanoiSolver {
    type Item = MoveRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_move()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = expected_moves(u32::from(self.state.disks())) - self.moves;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
