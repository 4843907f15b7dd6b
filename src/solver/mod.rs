//! Iterative Tower of Hanoi solver.
//!
//! The solver never recurses. It repeats a fixed 3-step pattern of pole
//! pairs and, for each pair, makes whichever move between the two poles is
//! legal. The pair order depends on disk-count parity (`Cycle`).
//!
//! - `HanoiSolver`: stepwise solver, also an `Iterator` over moves
//! - `solve_with`: validate and run to completion into any `MoveSink`
//! - `solve`: `solve_with` printing to stdout

mod cycle;
mod engine;

pub use cycle::{Cycle, CYCLE_LEN};
pub use engine::{expected_moves, HanoiSolver, SolveReport};

use crate::core::SolveConfig;
use crate::error::HanoiError;
use crate::trace::{MoveSink, WriterSink};

/// Solve the puzzle described by `config`, reporting moves to `sink`.
///
/// Invalid configs are rejected before anything reaches the sink.
pub fn solve_with<S: MoveSink + ?Sized>(
    config: &SolveConfig,
    sink: &mut S,
) -> Result<SolveReport, HanoiError> {
    HanoiSolver::new(config)?.run(sink)
}

/// Move `disks` disks from pole `source` to pole `destination`, printing
/// each move to stdout.
pub fn solve(disks: u32, source: u8, destination: u8) -> Result<SolveReport, HanoiError> {
    let config = SolveConfig::new(disks, source, destination);
    solve_with(&config, &mut WriterSink::stdout())
}
