//! Move trace output.
//!
//! Every disk relocation is handed to a `MoveSink`. The solver does not know
//! where moves end up:
//! - **Text** (`WriterSink`): the `Move disk from pole X to pole Y` lines
//! - **JSON lines** (`JsonLinesSink`): one object per move
//! - **In memory** (`MoveLog`): collected records for callers and tests
//!
//! ## Example Usage
//!
//! ```
//! use hanoi_stack::core::SolveConfig;
//! use hanoi_stack::solver::solve_with;
//! use hanoi_stack::trace::WriterSink;
//!
//! let mut out = Vec::new();
//! let mut sink = WriterSink::new(&mut out);
//! solve_with(&SolveConfig::new(2, 0, 2), &mut sink).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(
//!     text,
//!     "Move disk from pole 0 to pole 1\n\
//!      Move disk from pole 0 to pole 2\n\
//!      Move disk from pole 1 to pole 2\n"
//! );
//! ```

mod json;
mod memory;
mod writer;

pub use json::JsonLinesSink;
pub use memory::MoveLog;
pub use writer::WriterSink;

use crate::core::MoveRecord;
use crate::error::HanoiError;

/// Destination for move records.
///
/// Implementations receive moves in order, once each, followed by a single
/// `finish()` call when the run completes.
pub trait MoveSink {
    /// Report one move.
    fn record(&mut self, record: &MoveRecord) -> Result<(), HanoiError>;

    /// Called once after the last move. Flush buffered output here.
    fn finish(&mut self) -> Result<(), HanoiError> {
        Ok(())
    }
}

impl<S: MoveSink + ?Sized> MoveSink for &mut S {
    fn record(&mut self, record: &MoveRecord) -> Result<(), HanoiError> {
        (**self).record(record)
    }

    fn finish(&mut self) -> Result<(), HanoiError> {
        (**self).finish()
    }
}
