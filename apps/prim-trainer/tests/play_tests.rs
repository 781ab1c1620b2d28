//! Play loop transcripts in text and JSON mode.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use prim_core::{GraphStore, NodeId, SessionStatus};
use prim_trainer::{Command, Flow, GraphConfig, Repl, TrainerError};
use serde_json::Value;

fn demo_repl(json_mode: bool) -> Repl {
    Repl::new(GraphConfig::demo().build_engine().unwrap(), json_mode)
}

fn run(repl: &mut Repl, script: &str) -> String {
    let mut out = Vec::new();
    repl.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn json_lines(text: &str) -> Vec<Value> {
    text.lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

// =============================================================================
// TEXT MODE
// =============================================================================

#[test]
fn test_demo_town_by_hand() {
    let mut repl = demo_repl(false);
    let text = run(
        &mut repl,
        "start\npick 0 1\npick 1 2\npick 2 3\npick 2 4\n",
    );

    assert!(text.contains("Tree complete! Total MST cost: 14"));
    assert_eq!(repl.engine().status(), SessionStatus::Complete);
    assert_eq!(repl.engine().total_cost().value(), 14);
}

#[test]
fn test_wrong_pick_is_explained() {
    let mut repl = demo_repl(false);
    let text = run(&mut repl, "start\npick 0 2\n");

    assert!(text.contains("but a cheaper road costs 4"));
    assert_eq!(repl.engine().total_cost().value(), 0);
}

#[test]
fn test_hint_before_start() {
    let mut repl = demo_repl(false);
    let text = run(&mut repl, "hint\n");
    assert!(text.contains("No hint available"));
}

#[test]
fn test_solve_lists_steps() {
    let mut repl = demo_repl(false);
    let text = run(&mut repl, "solve\n");

    assert!(text.contains("Edge selected: (0 - 1), Cost: 4"));
    assert!(text.contains("Total MST Cost: 14"));
    // Solving never touches the live session.
    assert_eq!(repl.engine().status(), SessionStatus::Idle);
}

#[test]
fn test_edge_draft_flow() {
    let mut repl = demo_repl(false);
    let text = run(&mut repl, "node 10 10\nlink 4\nlink 5\nweight x\nweight 2\n");

    assert!(text.contains("Node 5 added at (10, 10)"));
    assert!(text.contains("Edge 4 - 5 pending"));
    assert!(text.contains("Error: "));
    assert!(text.contains("Edge (4 - 5, cost 2) added"));
    assert_eq!(repl.engine().graph().edges().len(), 8);
}

#[test]
fn test_bare_weight_commits_default() {
    let mut repl = demo_repl(false);
    let text = run(&mut repl, "link 0\nlink 4\nweight\n");

    assert!(text.contains("Edge (0 - 4, cost 5) added"));
    let edge = repl.engine().graph().edges()[7];
    assert_eq!(edge.weight, prim_core::primitives::DEFAULT_EDGE_WEIGHT);
    assert!(!repl.engine().draft().is_pending());
}

#[test]
fn test_completed_run_says_so() {
    let mut repl = demo_repl(false);
    let text = run(
        &mut repl,
        "start\nhint\nhint\nhint\nhint\nhint\npick 3 4\n",
    );

    assert_eq!(
        text.matches("Tree complete! Total MST cost: 14. Reset or start again.")
            .count(),
        2
    );
    assert!(!text.contains("No hint available"));
}

#[test]
fn test_duplicate_edge_is_reported() {
    let mut repl = demo_repl(false);
    let text = run(&mut repl, "edge 1 0 9\nstatus\n");

    assert!(text.contains("Error: "));
    assert!(text.contains("Graph:      5 nodes, 7 edges"));
}

#[test]
fn test_select_changes_start() {
    let mut repl = demo_repl(false);
    run(&mut repl, "select 4\nstart\n");
    assert_eq!(repl.engine().session().start_node(), Some(NodeId(4)));
}

#[test]
fn test_select_unknown_node_is_recoverable() {
    let mut repl = demo_repl(false);
    let text = run(&mut repl, "select 99\nstart\n");
    assert!(text.contains("Error: "));
    assert_eq!(repl.engine().session().start_node(), Some(NodeId(0)));
}

// =============================================================================
// JSON MODE
// =============================================================================

#[test]
fn test_json_mode_one_object_per_line() {
    let mut repl = demo_repl(true);
    let text = run(&mut repl, "start\npick 0 1\npick 0 1\nfly\n");
    let lines = json_lines(&text);

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["event"], "status");
    assert_eq!(lines[0]["snapshot"]["status"], "running");

    assert_eq!(lines[1]["event"], "pick");
    assert_eq!(lines[1]["result"]["verdict"], "correct");
    assert_eq!(lines[1]["snapshot"]["total_cost"], 4);

    assert_eq!(lines[2]["result"]["verdict"], "already_in_tree");
    assert_eq!(lines[3]["event"], "error");
}

#[test]
fn test_json_hint_applies_edge() {
    let mut repl = demo_repl(true);
    let text = run(&mut repl, "start\nhint\n");
    let lines = json_lines(&text);

    assert_eq!(lines[1]["event"], "hint");
    assert_eq!(lines[1]["edge"]["a"], 0);
    assert_eq!(lines[1]["edge"]["b"], 1);
    assert_eq!(lines[1]["snapshot"]["visited"], serde_json::json!([0, 1]));
}

#[test]
fn test_json_solve() {
    let mut repl = demo_repl(true);
    let lines = json_lines(&run(&mut repl, "solve\n"));

    assert_eq!(lines[0]["event"], "solve");
    assert_eq!(lines[0]["run"]["total_cost"], 14);
    assert_eq!(lines[0]["run"]["steps"].as_array().unwrap().len(), 4);
}

// =============================================================================
// DIRECT EXECUTION
// =============================================================================

#[test]
fn test_execute_returns_flow() {
    let mut repl = demo_repl(false);
    let mut out = Vec::new();

    assert_eq!(repl.execute(Command::Hint, &mut out).unwrap(), Flow::Continue);
    assert_eq!(repl.execute(Command::Quit, &mut out).unwrap(), Flow::Quit);
}

#[test]
fn test_execute_surfaces_core_errors() {
    let mut repl = demo_repl(false);
    let mut out = Vec::new();

    let result = repl.execute(Command::Weight("3".to_string()), &mut out);
    assert!(matches!(result, Err(TrainerError::Core(_))));
    assert!(result.unwrap_err().is_recoverable());
}
