//! In-memory move log.

use serde::{Deserialize, Serialize};

use crate::core::MoveRecord;
use crate::error::HanoiError;

use super::MoveSink;

/// Collects every move of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Recorded moves in order.
    #[must_use]
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// The trace lines, as the text sink would print them.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }

    /// Consume the log, returning the records.
    #[must_use]
    pub fn into_records(self) -> Vec<MoveRecord> {
        self.records
    }
}

impl MoveSink for MoveLog {
    fn record(&mut self, record: &MoveRecord) -> Result<(), HanoiError> {
        self.records.push(*record);
        Ok(())
    }
}
