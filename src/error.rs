/// Which caller-supplied pole label an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoleRole {
    Source,
    Destination,
}

impl std::fmt::Display for PoleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoleRole::Source => write!(f, "source"),
            PoleRole::Destination => write!(f, "destination"),
        }
    }
}

/// Errors that can occur while setting up or running a solve.
#[derive(Debug, thiserror::Error)]
pub enum HanoiError {
    #[error("disk count must be at least 1")]
    NoDisks,

    #[error("disk count {disks} exceeds the supported maximum of {max}")]
    TooManyDisks { disks: u32, max: u32 },

    #[error("{role} pole label {label} is out of range (expected 0, 1 or 2)")]
    LabelOutOfRange { role: PoleRole, label: u8 },

    #[error("source and destination poles must differ (both are {0})")]
    SameSourceAndDestination(u8),

    #[error("invariant violated: {0}")]
    InvariantViolated(String),

    #[error("failed to write move trace: {0}")]
    Trace(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HanoiError {
    /// Is this a rejected input, as opposed to a failure during the run?
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            HanoiError::NoDisks
                | HanoiError::TooManyDisks { .. }
                | HanoiError::LabelOutOfRange { .. }
                | HanoiError::SameSourceAndDestination(_)
        )
    }
}
