//! Solver integration tests.
//!
//! These tests drive full solves through the public API and check move
//! counts, final positions, and the pole ordering after every move.

use hanoi_stack::core::{PoleId, SolveConfig};
use hanoi_stack::solver::{expected_moves, solve, solve_with, HanoiSolver};
use hanoi_stack::trace::MoveLog;
use hanoi_stack::HanoiError;
use proptest::prelude::*;

fn run(disks: u32, source: u8, destination: u8) -> (hanoi_stack::SolveReport, MoveLog) {
    let mut log = MoveLog::new();
    let report = solve_with(&SolveConfig::new(disks, source, destination), &mut log).unwrap();
    (report, log)
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[test]
fn test_one_disk_single_line() {
    let (report, log) = run(1, 0, 2);

    assert_eq!(report.moves, 1);
    assert_eq!(log.lines(), vec!["Move disk from pole 0 to pole 2"]);
}

#[test]
fn test_two_disks_final_state() {
    let (report, log) = run(2, 0, 2);

    assert_eq!(log.len(), 3);
    assert_eq!(report.final_poles.numbers(2), vec![2, 1]);
    assert!(report.final_poles.numbers(0).is_empty());
    assert!(report.final_poles.numbers(1).is_empty());
}

#[test]
fn test_three_disks_final_state() {
    let (report, log) = run(3, 0, 2);

    assert_eq!(log.len(), 7);
    assert_eq!(report.final_poles.numbers(2), vec![3, 2, 1]);
    assert!(report.final_poles.numbers(0).is_empty());
    assert!(report.final_poles.numbers(1).is_empty());
}

#[test]
fn test_five_disks() {
    let (report, log) = run(5, 0, 2);

    assert_eq!(log.len(), 31);
    assert_eq!(report.moves, 31);
    assert_eq!(report.final_poles.numbers(2), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_larger_run_is_optimal() {
    let (report, _) = run(12, 1, 0);
    assert_eq!(report.moves, expected_moves(12));
    assert_eq!(report.final_poles.numbers(0).len(), 12);
}

/// The stdout entry point reports the same run as `solve_with`.
#[test]
fn test_solve_to_stdout() {
    let report = solve(3, 0, 2).unwrap();

    assert_eq!(report.moves, 7);
    assert_eq!(report.final_poles.numbers(2), vec![3, 2, 1]);
}

#[test]
fn test_solve_to_stdout_rejects_zero_disks() {
    let err = solve(0, 0, 2).unwrap_err();
    assert!(matches!(err, HanoiError::NoDisks));
}

// =============================================================================
// Labeling
// =============================================================================

/// Reversing source and destination mirrors the run.
#[test]
fn test_reversed_labels_mirror() {
    let (forward, forward_log) = run(4, 0, 2);
    let (reverse, reverse_log) = run(4, 2, 0);

    assert_eq!(forward.moves, reverse.moves);
    assert_eq!(reverse.final_poles.numbers(0), vec![4, 3, 2, 1]);

    for (f, r) in forward_log.records().iter().zip(reverse_log.records()) {
        assert_eq!(f.disk, r.disk);
        assert_eq!(2 - f.from.raw(), r.from.raw());
        assert_eq!(2 - f.to.raw(), r.to.raw());
    }
}

#[test]
fn test_moves_only_use_valid_labels() {
    let (_, log) = run(6, 1, 2);
    for record in log.records() {
        assert!(record.from.is_valid() && record.to.is_valid());
        assert_ne!(record.from, record.to);
    }
}

// =============================================================================
// Invalid Input
// =============================================================================

#[test]
fn test_invalid_input_produces_no_moves() {
    for config in [
        SolveConfig::new(0, 0, 2),
        SolveConfig::new(3, 0, 0),
        SolveConfig::new(3, 3, 1),
        SolveConfig::new(3, 0, 4),
        SolveConfig::new(64, 0, 2),
    ] {
        let mut log = MoveLog::new();
        let err = solve_with(&config, &mut log).unwrap_err();

        assert!(err.is_invalid_input(), "{:?} -> {}", config, err);
        assert!(log.is_empty());
    }
}

#[test]
fn test_same_pole_error_variant() {
    let err = HanoiSolver::new(&SolveConfig::new(2, 1, 1)).unwrap_err();
    assert!(matches!(err, HanoiError::SameSourceAndDestination(1)));
}

// =============================================================================
// Properties
// =============================================================================

fn label_pair() -> impl Strategy<Value = (u8, u8)> {
    (0u8..3, 1u8..3).prop_map(|(source, offset)| (source, (source + offset) % 3))
}

proptest! {
    #[test]
    fn prop_move_count_is_optimal(disks in 1u32..=10, (source, destination) in label_pair()) {
        let (report, log) = run(disks, source, destination);

        prop_assert_eq!(report.moves, expected_moves(disks));
        prop_assert_eq!(log.len() as u64, expected_moves(disks));
    }

    #[test]
    fn prop_every_state_is_valid(disks in 1u32..=9, (source, destination) in label_pair()) {
        let mut solver = HanoiSolver::new(&SolveConfig::new(disks, source, destination)).unwrap();

        while solver.next_move().is_some() {
            prop_assert!(solver.state().verify().is_ok());
        }

        let state = solver.state();
        prop_assert!(state.is_solved());
        prop_assert!(state.pole(PoleId::SOURCE).is_empty());
        prop_assert!(state.pole(PoleId::AUXILIARY).is_empty());
    }

    #[test]
    fn prop_final_destination_sorted(disks in 1u32..=10, (source, destination) in label_pair()) {
        let (report, _) = run(disks, source, destination);

        let expected: Vec<u8> = (1..=disks as u8).rev().collect();
        prop_assert_eq!(report.final_poles.numbers(destination), expected);
        prop_assert!(report.final_poles.numbers(source).is_empty());
        prop_assert!(report.final_poles.numbers(3 - source - destination).is_empty());
    }
}
