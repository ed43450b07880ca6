// Integration tests for the puzzle tools

use historian::interpreter::constants::SNAPSHOT_MEMORY_LIMIT;
use historian::interpreter::engine::ToggleState;
use historian::interpreter::session::ScanSession;
use historian::puzzles::lists::{parse_location_lists, similarity_score, total_distance};
use historian::puzzles::reports::{
    count_safe_reports, count_safe_reports_with_dampener, parse_reports,
};
use historian::{extract_multiply_results_conditional, extract_multiply_results_unconditional};
use num_bigint::BigUint;
use std::fs;
use std::path::Path;

fn demo(name: &str) -> String {
    fs::read_to_string(Path::new("demos").join(name)).expect("Failed to read demo file")
}

#[test]
fn test_memory_demo() {
    let memory = demo("memory.txt");

    assert_eq!(
        extract_multiply_results_unconditional(&memory),
        BigUint::from(161u32)
    );
    assert_eq!(
        extract_multiply_results_conditional(&memory),
        BigUint::from(48u32)
    );
}

#[test]
fn test_memory_multiline_demo() {
    let memory = demo("memory_multiline.txt");

    // don't() on line 1 still applies on line 4; do() on line 5 re-enables
    assert_eq!(
        extract_multiply_results_unconditional(&memory),
        BigUint::from(9u32 + 100 + 4 + 7)
    );
    assert_eq!(
        extract_multiply_results_conditional(&memory),
        BigUint::from(9u32 + 7)
    );
}

#[test]
fn test_session_agrees_with_scans() {
    let memory = demo("memory_multiline.txt");
    let mut session = ScanSession::new(&memory, SNAPSHOT_MEMORY_LIMIT).expect("Scan failed");

    session.jump_to_end().expect("Jump failed");
    let last = session.current();

    assert_eq!(last.total_sum, extract_multiply_results_unconditional(&memory));
    assert_eq!(last.enabled_sum, extract_multiply_results_conditional(&memory));
    assert_eq!(last.toggle, ToggleState::Enabled);
    assert_eq!(last.location.line, 5);
}

#[test]
fn test_session_walk_is_monotonic() {
    let memory = demo("memory.txt");
    let mut session = ScanSession::new(&memory, SNAPSHOT_MEMORY_LIMIT).expect("Scan failed");

    let mut previous = session.current().clone();
    while session.step_forward().is_ok() {
        let current = session.current().clone();
        assert!(current.total_sum >= previous.total_sum);
        assert!(current.enabled_sum >= previous.enabled_sum);
        assert!(current.enabled_sum <= current.total_sum);
        previous = current;
    }

    assert_eq!(session.history_position() + 1, session.total_snapshots());
}

#[test]
fn test_lists_demo() {
    let lists = parse_location_lists(&demo("lists.txt")).expect("Parsing failed");

    assert_eq!(total_distance(&lists.left, &lists.right), 11);
    assert_eq!(similarity_score(&lists.left, &lists.right), 31);
}

#[test]
fn test_reports_demo() {
    let reports = parse_reports(&demo("reports.txt")).expect("Parsing failed");

    assert_eq!(count_safe_reports(&reports), 2);
    assert_eq!(count_safe_reports_with_dampener(&reports), 4);
}
