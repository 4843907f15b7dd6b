//! Trace output and demonstration driver tests.

use hanoi_stack::core::{DemoConfig, MoveRecord, SolveConfig, DEMO_SEPARATOR};
use hanoi_stack::solver::solve_with;
use hanoi_stack::trace::{JsonLinesSink, MoveLog, WriterSink};
use hanoi_stack::run_demo;

// =============================================================================
// Text Sink
// =============================================================================

#[test]
fn test_text_trace_exact_format() {
    let mut sink = WriterSink::new(Vec::new());
    solve_with(&SolveConfig::new(3, 0, 2), &mut sink).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text.lines().count(), 7);
    assert!(text.ends_with('\n'));
    for line in text.lines() {
        assert!(line.starts_with("Move disk from pole "), "{}", line);
    }
}

#[test]
fn test_text_trace_uses_caller_labels() {
    let mut sink = WriterSink::new(Vec::new());
    solve_with(&SolveConfig::new(1, 2, 1), &mut sink).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text, "Move disk from pole 2 to pole 1\n");
}

#[test]
fn test_text_matches_move_log() {
    let mut sink = WriterSink::new(Vec::new());
    let mut log = MoveLog::new();
    let config = SolveConfig::new(5, 1, 0);

    solve_with(&config, &mut sink).unwrap();
    solve_with(&config, &mut log).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    assert_eq!(lines, log.lines());
}

// =============================================================================
// JSON Lines Sink
// =============================================================================

#[test]
fn test_json_trace_round_trips_to_log() {
    let config = SolveConfig::new(4, 0, 2);

    let mut sink = JsonLinesSink::new(Vec::new());
    solve_with(&config, &mut sink).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();

    let parsed: Vec<MoveRecord> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let mut log = MoveLog::new();
    solve_with(&config, &mut log).unwrap();

    assert_eq!(parsed, log.into_records());
}

// =============================================================================
// Demonstration Driver
// =============================================================================

#[test]
fn test_default_demo() {
    let mut out = Vec::new();
    let reports = run_demo(&DemoConfig::default(), &mut out).unwrap();

    let moves: Vec<u64> = reports.iter().map(|r| r.moves).collect();
    assert_eq!(moves, vec![1, 3, 7, 15, 31]);

    let text = String::from_utf8(out).unwrap();
    let separators = text.lines().filter(|l| *l == DEMO_SEPARATOR).count();
    assert_eq!(separators, 4);
    assert_eq!(text.lines().count(), 1 + 3 + 7 + 15 + 31 + 4);
    assert_eq!(text.lines().next(), Some("Move disk from pole 0 to pole 2"));
    assert_eq!(text.lines().last(), Some("Move disk from pole 0 to pole 2"));
}

#[test]
fn test_demo_single_run_has_no_separator() {
    let mut out = Vec::new();
    run_demo(&DemoConfig::default().with_max_disks(1), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "Move disk from pole 0 to pole 2\n");
}
