//! # hanoi-stack
//!
//! An iterative Tower of Hanoi solver over three explicit pole stacks.
//!
//! ## Design Principles
//!
//! 1. **No recursion**: the solver repeats a fixed 3-step pattern of pole
//!    pairs, picked by disk-count parity, until the destination is full.
//!
//! 2. **Direction from the disks**: for each pair the one legal move is
//!    made, so the pattern never has to track which way a pair moves.
//!
//! 3. **Fresh state per run**: poles and the label mapping live in a
//!    `HanoiState` built for one solve and dropped afterwards.
//!
//! ## Modules
//!
//! - `core`: Disks, poles, labels, configuration, moves, state
//! - `solver`: Cycle selection and the stepwise solver
//! - `trace`: Move sinks (text, JSON lines, in-memory)
//! - `demo`: The 1..=N demonstration sweep
//! - `logging`: Tracing subscriber setup
//!
//! ## Example
//!
//! ```
//! use hanoi_stack::{solve_with, MoveLog, SolveConfig};
//!
//! let mut log = MoveLog::new();
//! let report = solve_with(&SolveConfig::new(3, 0, 2), &mut log).unwrap();
//!
//! assert_eq!(report.moves, 7);
//! assert_eq!(report.final_poles.numbers(2), vec![3, 2, 1]);
//! ```

pub mod core;
pub mod error;
pub mod solver;
pub mod trace;
pub mod demo;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    Disk, Pole, PoleId, Poles,
    PoleLabel, PoleLabels,
    SolveConfig, DemoConfig, MAX_DISKS,
    MoveRecord, HanoiState, PolesSnapshot,
};

pub use crate::error::{HanoiError, PoleRole};

pub use crate::solver::{expected_moves, solve, solve_with, Cycle, HanoiSolver, SolveReport};

pub use crate::trace::{JsonLinesSink, MoveLog, MoveSink, WriterSink};

pub use crate::demo::run_demo;
