//! Core puzzle types: disks, poles, labels, configuration, moves, state.
//!
//! Everything here is per-run data. The solver in `crate::solver` drives a
//! `HanoiState` through its moves.

pub mod pole;
pub mod labels;
pub mod config;
pub mod moves;
pub mod state;

pub use pole::{Disk, Pole, PoleId, Poles, POLE_COUNT};
pub use labels::{PoleLabel, PoleLabels};
pub use config::{DemoConfig, SolveConfig, DEMO_SEPARATOR, MAX_DISKS};
pub use moves::{MoveRecord, Relocation};
pub use state::{HanoiState, LabeledPole, PolesSnapshot};
