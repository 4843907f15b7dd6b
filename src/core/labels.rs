//! Caller-facing pole labels.
//!
//! Callers name the source and destination poles with labels in `0..=2`.
//! Internally the solver always works from `PoleId::SOURCE` to
//! `PoleId::DESTINATION`; `PoleLabels` translates back so printed moves use
//! the caller's names.

use serde::{Deserialize, Serialize};

use super::pole::{PoleId, POLE_COUNT};

/// A pole name as chosen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoleLabel(pub u8);

impl PoleLabel {
    /// Create a new label.
    #[must_use]
    pub const fn new(label: u8) -> Self {
        Self(label)
    }

    /// Get the raw label value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Is this one of the three valid labels?
    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < POLE_COUNT
    }
}

impl std::fmt::Display for PoleLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mapping from internal `PoleId` to caller label.
///
/// ```
/// use hanoi_stack::core::{PoleId, PoleLabel, PoleLabels};
///
/// let labels = PoleLabels::new(PoleLabel::new(2), PoleLabel::new(1));
/// assert_eq!(labels[PoleId::SOURCE], PoleLabel::new(2));
/// assert_eq!(labels[PoleId::AUXILIARY], PoleLabel::new(0));
/// assert_eq!(labels[PoleId::DESTINATION], PoleLabel::new(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoleLabels {
    labels: [PoleLabel; POLE_COUNT],
}

impl PoleLabels {
    /// Build the mapping for a run from `source` to `destination`.
    ///
    /// The auxiliary label is whichever of 0, 1, 2 is left over.
    /// Panics if either label is out of range or they are equal.
    #[must_use]
    pub fn new(source: PoleLabel, destination: PoleLabel) -> Self {
        assert!(
            source.is_valid() && destination.is_valid(),
            "Pole labels must be 0, 1 or 2"
        );
        assert_ne!(source, destination, "Source and destination must differ");

        let auxiliary = PoleLabel(3 - source.0 - destination.0);
        Self {
            labels: [source, auxiliary, destination],
        }
    }

    /// Label of the pole the disks start on.
    #[must_use]
    pub fn source(&self) -> PoleLabel {
        self[PoleId::SOURCE]
    }

    /// Label of the spare pole.
    #[must_use]
    pub fn auxiliary(&self) -> PoleLabel {
        self[PoleId::AUXILIARY]
    }

    /// Label of the pole the disks must end on.
    #[must_use]
    pub fn destination(&self) -> PoleLabel {
        self[PoleId::DESTINATION]
    }

    /// Find the internal pole carrying `label`.
    #[must_use]
    pub fn pole_for(&self, label: PoleLabel) -> Option<PoleId> {
        PoleId::all().find(|&pole| self[pole] == label)
    }
}

impl std::ops::Index<PoleId> for PoleLabels {
    type Output = PoleLabel;

    fn index(&self, pole: PoleId) -> &Self::Output {
        &self.labels[pole.index()]
    }
}
