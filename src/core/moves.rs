//! Move representation.
//!
//! A `Relocation` is a move in internal pole indices, as the solver sees it.
//! A `MoveRecord` is the same move translated to caller labels and numbered,
//! which is what trace sinks receive.

use serde::{Deserialize, Serialize};

use super::labels::{PoleLabel, PoleLabels};
use super::pole::{Disk, PoleId};

/// A single disk move between internal poles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Relocation {
    pub from: PoleId,
    pub to: PoleId,
    pub disk: Disk,
}

impl Relocation {
    /// Translate to caller labels as move number `step`.
    #[must_use]
    pub fn labeled(self, step: u64, labels: &PoleLabels) -> MoveRecord {
        MoveRecord {
            step,
            from: labels[self.from],
            to: labels[self.to],
            disk: self.disk,
        }
    }
}

/// A move as reported to the caller.
///
/// `Display` renders the trace line (without the trailing newline):
///
/// ```
/// use hanoi_stack::core::{Disk, MoveRecord, PoleLabel};
///
/// let record = MoveRecord {
///     step: 1,
///     from: PoleLabel::new(0),
///     to: PoleLabel::new(2),
///     disk: Disk::new(1),
/// };
/// assert_eq!(record.to_string(), "Move disk from pole 0 to pole 2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based move number within the run.
    pub step: u64,

    /// Caller label of the pole the disk left.
    pub from: PoleLabel,

    /// Caller label of the pole the disk landed on.
    pub to: PoleLabel,

    /// The disk that moved.
    pub disk: Disk,
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move disk from pole {} to pole {}", self.from, self.to)
    }
}
