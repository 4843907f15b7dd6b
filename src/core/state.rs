//! Solve context: the three poles plus the label mapping for one run.
//!
//! A `HanoiState` is built fresh for every solve from a validated
//! `SolveConfig` and dropped when the solve ends. Nothing is shared between
//! runs.

use serde::{Deserialize, Serialize};

use super::config::SolveConfig;
use super::labels::{PoleLabel, PoleLabels};
use super::moves::Relocation;
use super::pole::{Disk, Pole, PoleId, Poles, POLE_COUNT};
use crate::error::HanoiError;

/// Per-run puzzle state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HanoiState {
    disks: u8,
    poles: Poles,
    labels: PoleLabels,
}

impl HanoiState {
    /// Validate `config` and set up the starting position: every disk on
    /// the source pole, largest number at the bottom.
    pub fn new(config: &SolveConfig) -> Result<Self, HanoiError> {
        config.validate()?;

        // validate() bounds disks by MAX_DISKS, well inside u8.
        let disks = config.disks as u8;
        let mut poles = Poles::new();
        poles.stack_disks(PoleId::SOURCE, disks);

        Ok(Self {
            disks,
            poles,
            labels: config.labels(),
        })
    }

    /// Total number of disks in play.
    #[must_use]
    pub fn disks(&self) -> u8 {
        self.disks
    }

    /// All three poles.
    #[must_use]
    pub fn poles(&self) -> &Poles {
        &self.poles
    }

    /// A single pole.
    #[must_use]
    pub fn pole(&self, pole: PoleId) -> &Pole {
        &self.poles[pole]
    }

    /// The label mapping for this run.
    #[must_use]
    pub fn labels(&self) -> &PoleLabels {
        &self.labels
    }

    /// Does the destination pole hold every disk?
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.poles[PoleId::DESTINATION].len() == usize::from(self.disks)
    }

    /// Make the one legal move between poles `a` and `b`.
    ///
    /// Direction comes from the disks, not the argument order: an empty pole
    /// receives from the other one, otherwise the smaller top disk moves.
    /// Returns `None` without touching state when the puzzle is already
    /// solved or both poles are empty.
    pub fn move_between(&mut self, a: PoleId, b: PoleId) -> Option<Relocation> {
        if self.is_solved() {
            return None;
        }

        let (from, to) = match (self.poles[a].top(), self.poles[b].top()) {
            (None, None) => return None,
            (None, Some(_)) => (b, a),
            (Some(_), None) => (a, b),
            (Some(top_a), Some(top_b)) => {
                if top_a.fits_on(top_b) {
                    (a, b)
                } else {
                    (b, a)
                }
            }
        };

        let disk = self.poles.transfer(from, to);
        Some(Relocation { from, to, disk })
    }

    /// Check pole ordering and that each disk `1..=N` appears exactly once.
    pub fn verify(&self) -> Result<(), HanoiError> {
        for (id, pole) in self.poles.iter() {
            if !pole.is_ordered() {
                return Err(HanoiError::InvariantViolated(format!(
                    "{} is out of order: {:?}",
                    id,
                    pole.disks()
                )));
            }
        }

        let mut all: Vec<Disk> = self
            .poles
            .iter()
            .flat_map(|(_, pole)| pole.disks().iter().copied())
            .collect();
        all.sort_unstable();

        let expected: Vec<Disk> = (1..=self.disks).map(Disk::new).collect();
        if all != expected {
            return Err(HanoiError::InvariantViolated(format!(
                "expected disks 1..={} across poles, found {:?}",
                self.disks, all
            )));
        }
        Ok(())
    }

    /// Capture pole contents keyed by caller label.
    #[must_use]
    pub fn snapshot(&self) -> PolesSnapshot {
        let poles = std::array::from_fn(|i| {
            let label = PoleLabel::new(i as u8);
            let disks = self
                .labels
                .pole_for(label)
                .map(|id| self.poles[id].disks().to_vec())
                .unwrap_or_default();
            LabeledPole { label, disks }
        });
        PolesSnapshot { poles }
    }
}

/// Contents of one pole under its caller label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledPole {
    pub label: PoleLabel,

    /// Disks from bottom to top.
    pub disks: Vec<Disk>,
}

/// Pole contents by caller label, ordered 0, 1, 2.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolesSnapshot {
    pub poles: [LabeledPole; POLE_COUNT],
}

impl PolesSnapshot {
    /// Disks (bottom to top) on the pole with this label.
    #[must_use]
    pub fn get(&self, label: PoleLabel) -> Option<&[Disk]> {
        self.poles
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.disks.as_slice())
    }

    /// Raw disk numbers on the pole with this label; empty if unknown.
    #[must_use]
    pub fn numbers(&self, label: u8) -> Vec<u8> {
        self.get(PoleLabel::new(label))
            .map(|disks| disks.iter().map(|d| d.raw()).collect())
            .unwrap_or_default()
    }
}
