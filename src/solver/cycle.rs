//! The repeating 3-step pole-pair pattern.

use serde::{Deserialize, Serialize};

use crate::core::PoleId;

/// Number of pair-moves in one pass of a cycle.
pub const CYCLE_LEN: usize = 3;

const S: PoleId = PoleId::SOURCE;
const A: PoleId = PoleId::AUXILIARY;
const D: PoleId = PoleId::DESTINATION;

const ODD_PAIRS: [(PoleId, PoleId); CYCLE_LEN] = [(S, D), (S, A), (A, D)];
const EVEN_PAIRS: [(PoleId, PoleId); CYCLE_LEN] = [(S, A), (S, D), (A, D)];

/// Which pair order drives the run. Chosen by disk-count parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cycle {
    /// Odd disk counts: source/destination, source/auxiliary, auxiliary/destination.
    Odd,
    /// Even disk counts: source/auxiliary, source/destination, auxiliary/destination.
    Even,
}

impl Cycle {
    /// Pick the cycle for `disks`.
    #[must_use]
    pub fn for_disks(disks: u32) -> Self {
        if disks % 2 == 1 {
            Cycle::Odd
        } else {
            Cycle::Even
        }
    }

    /// The pole pairs, in order.
    #[must_use]
    pub fn pairs(self) -> &'static [(PoleId, PoleId); CYCLE_LEN] {
        match self {
            Cycle::Odd => &ODD_PAIRS,
            Cycle::Even => &EVEN_PAIRS,
        }
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cycle::Odd => write!(f, "odd"),
            Cycle::Even => write!(f, "even"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parity() {
        assert_eq!(Cycle::for_disks(1), Cycle::Odd);
        assert_eq!(Cycle::for_disks(2), Cycle::Even);
        assert_eq!(Cycle::for_disks(5), Cycle::Odd);
        assert_eq!(Cycle::for_disks(8), Cycle::Even);
    }

    #[test]
    fn test_pairs() {
        assert_eq!(Cycle::Odd.pairs()[0], (PoleId::SOURCE, PoleId::DESTINATION));
        assert_eq!(Cycle::Even.pairs()[0], (PoleId::SOURCE, PoleId::AUXILIARY));

        // Both cycles end on the auxiliary/destination pair.
        for cycle in [Cycle::Odd, Cycle::Even] {
            assert_eq!(cycle.pairs()[2], (PoleId::AUXILIARY, PoleId::DESTINATION));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Cycle::Odd.to_string(), "odd");
        assert_eq!(Cycle::Even.to_string(), "even");
    }
}
