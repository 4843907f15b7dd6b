//! Run configuration.
//!
//! - `SolveConfig`: one solve (disk count, source label, destination label)
//! - `DemoConfig`: the demonstration sweep over disk counts `1..=max_disks`
//!
//! Configs are plain values; `validate()` checks them before any state is
//! built so a rejected run produces no output.

use serde::{Deserialize, Serialize};

use super::labels::{PoleLabel, PoleLabels};
use crate::error::{HanoiError, PoleRole};

/// Largest supported disk count. `2^63 - 1` moves still fit a `u64` counter.
pub const MAX_DISKS: u32 = 63;

/// Line printed between demonstration runs.
pub const DEMO_SEPARATOR: &str = "------------------------------";

/// Configuration for a single solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveConfig {
    /// Number of disks (1..=MAX_DISKS).
    pub disks: u32,

    /// Caller label of the starting pole.
    pub source: u8,

    /// Caller label of the target pole.
    pub destination: u8,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            disks: 3,
            source: 0,
            destination: 2,
        }
    }
}

impl SolveConfig {
    /// Create a new solve configuration.
    pub fn new(disks: u32, source: u8, destination: u8) -> Self {
        Self {
            disks,
            source,
            destination,
        }
    }

    /// Set the disk count.
    #[must_use]
    pub fn with_disks(mut self, disks: u32) -> Self {
        self.disks = disks;
        self
    }

    /// Set the source label.
    #[must_use]
    pub fn with_source(mut self, source: u8) -> Self {
        self.source = source;
        self
    }

    /// Set the destination label.
    #[must_use]
    pub fn with_destination(mut self, destination: u8) -> Self {
        self.destination = destination;
        self
    }

    /// Check the disk count and pole labels.
    pub fn validate(&self) -> Result<(), HanoiError> {
        if self.disks == 0 {
            return Err(HanoiError::NoDisks);
        }
        if self.disks > MAX_DISKS {
            return Err(HanoiError::TooManyDisks {
                disks: self.disks,
                max: MAX_DISKS,
            });
        }
        if !PoleLabel::new(self.source).is_valid() {
            return Err(HanoiError::LabelOutOfRange {
                role: PoleRole::Source,
                label: self.source,
            });
        }
        if !PoleLabel::new(self.destination).is_valid() {
            return Err(HanoiError::LabelOutOfRange {
                role: PoleRole::Destination,
                label: self.destination,
            });
        }
        if self.source == self.destination {
            return Err(HanoiError::SameSourceAndDestination(self.source));
        }
        Ok(())
    }

    /// Build the label mapping. Call `validate()` first.
    #[must_use]
    pub fn labels(&self) -> PoleLabels {
        PoleLabels::new(PoleLabel::new(self.source), PoleLabel::new(self.destination))
    }
}

/// Configuration for the demonstration sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Largest disk count to run; runs go from 1 up to this.
    pub max_disks: u32,

    /// Caller label of the starting pole.
    pub source: u8,

    /// Caller label of the target pole.
    pub destination: u8,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            max_disks: 5,
            source: 0,
            destination: 2,
        }
    }
}

impl DemoConfig {
    /// Set the largest disk count.
    #[must_use]
    pub fn with_max_disks(mut self, max_disks: u32) -> Self {
        self.max_disks = max_disks;
        self
    }

    /// Set the source and destination labels.
    #[must_use]
    pub fn with_poles(mut self, source: u8, destination: u8) -> Self {
        self.source = source;
        self.destination = destination;
        self
    }

    /// One `SolveConfig` per run, in order.
    pub fn runs(&self) -> impl Iterator<Item = SolveConfig> {
        let Self {
            max_disks,
            source,
            destination,
        } = *self;
        (1..=max_disks).map(move |disks| SolveConfig::new(disks, source, destination))
    }

    /// Validate every run up front.
    pub fn validate(&self) -> Result<(), HanoiError> {
        if self.max_disks == 0 {
            return Err(HanoiError::NoDisks);
        }
        // The largest run covers the disk-count bound; labels are shared.
        SolveConfig::new(self.max_disks, self.source, self.destination).validate()
    }
}
