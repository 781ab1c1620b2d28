//! # Reports
//!
//! Text and JSON rendering of engine output.
//!
//! In JSON mode every report is one line, so a driving program can read
//! responses line by line.

use crate::TrainerError;
use prim_core::{Edge, GraphMetrics, PrimRun, SessionStatus, Snapshot, Verdict};
use serde_json::json;
use std::io::Write;

fn write_json(out: &mut impl Write, value: &serde_json::Value) -> Result<(), TrainerError> {
    writeln!(out, "{}", serde_json::to_string(value)?)?;
    Ok(())
}

fn edge_list(edges: &[Edge]) -> String {
    if edges.is_empty() {
        return "-".to_string();
    }
    edges
        .iter()
        .map(|e| format!("{} ({})", e.pair(), e.weight))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the current engine state.
pub fn write_snapshot(
    out: &mut impl Write,
    snapshot: &Snapshot,
    json_mode: bool,
) -> Result<(), TrainerError> {
    if json_mode {
        return write_json(out, &json!({ "event": "status", "snapshot": snapshot }));
    }

    writeln!(out, "Status:     {}", snapshot.status)?;
    writeln!(
        out,
        "Graph:      {} nodes, {} edges",
        snapshot.nodes.len(),
        snapshot.edges.len()
    )?;
    match snapshot.start {
        Some(start) => writeln!(out, "Start:      {}", start)?,
        None => writeln!(out, "Start:      {} (selected)", snapshot.selected_start)?,
    }
    writeln!(out, "Tree:       {}", edge_list(&snapshot.accepted))?;
    writeln!(out, "Frontier:   {}", edge_list(&snapshot.candidates))?;
    writeln!(out, "Total cost: {}", snapshot.total_cost)?;
    Ok(())
}

/// Render the verdict on a pick.
pub fn write_verdict(
    out: &mut impl Write,
    verdict: &Verdict,
    snapshot: &Snapshot,
    json_mode: bool,
) -> Result<(), TrainerError> {
    if json_mode {
        return write_json(
            out,
            &json!({
                "event": "pick",
                "result": verdict,
                "message": verdict.message(),
                "snapshot": snapshot,
            }),
        );
    }

    if *verdict == Verdict::Ignored && snapshot.status == SessionStatus::Complete {
        writeln!(
            out,
            "Tree complete! Total MST cost: {}. Reset or start again.",
            snapshot.total_cost
        )?;
        return Ok(());
    }

    writeln!(out, "{}", verdict.message())?;
    if verdict.is_accepted() {
        writeln!(out, "Total cost: {}", snapshot.total_cost)?;
        if snapshot.expected_min.is_none() {
            writeln!(out, "Tree complete! Total MST cost: {}", snapshot.total_cost)?;
        }
    }
    Ok(())
}

/// Render a hint (or the lack of one).
pub fn write_hint(
    out: &mut impl Write,
    hint: Option<Edge>,
    snapshot: &Snapshot,
    json_mode: bool,
) -> Result<(), TrainerError> {
    if json_mode {
        return write_json(
            out,
            &json!({ "event": "hint", "edge": hint, "snapshot": snapshot }),
        );
    }

    match hint {
        Some(edge) => {
            writeln!(out, "Hint: Prim adds {}.", edge)?;
            writeln!(out, "Total cost: {}", snapshot.total_cost)?;
            if snapshot.expected_min.is_none() {
                writeln!(out, "Tree complete! Total MST cost: {}", snapshot.total_cost)?;
            }
        }
        None if snapshot.status == SessionStatus::Complete => writeln!(
            out,
            "Tree complete! Total MST cost: {}. Reset or start again.",
            snapshot.total_cost
        )?,
        None => writeln!(out, "No hint available: no run in progress.")?,
    }
    Ok(())
}

/// Render a full Prim run, one step per line.
pub fn write_run(out: &mut impl Write, run: &PrimRun, json_mode: bool) -> Result<(), TrainerError> {
    if json_mode {
        return write_json(out, &json!({ "event": "solve", "run": run }));
    }

    writeln!(out, "Prim's algorithm from node {}", run.start)?;
    for edge in &run.steps {
        writeln!(
            out,
            "Edge selected: ({} - {}), Cost: {}",
            edge.a, edge.b, edge.weight
        )?;
    }
    writeln!(out, "Total MST Cost: {}", run.total_cost)?;
    Ok(())
}

/// Render graph metrics.
pub fn write_metrics(
    out: &mut impl Write,
    metrics: &GraphMetrics,
    json_mode: bool,
) -> Result<(), TrainerError> {
    if json_mode {
        return write_json(out, &json!({ "event": "check", "metrics": metrics }));
    }

    writeln!(out, "Graph Check")?;
    writeln!(out, "===========")?;
    writeln!(out, "Nodes:        {}", metrics.node_count)?;
    writeln!(out, "Edges:        {}", metrics.edge_count)?;
    writeln!(out, "Total weight: {}", metrics.total_weight)?;
    writeln!(out, "Components:   {}", metrics.component_count)?;
    writeln!(out, "Forest cost:  {}", metrics.forest_cost)?;
    if !metrics.is_connected() {
        writeln!(
            out,
            "Note: graph is disconnected; a run spans only the start node's component."
        )?;
    }
    Ok(())
}

/// Render a plain acknowledgement.
pub fn write_message(
    out: &mut impl Write,
    event: &str,
    message: &str,
    json_mode: bool,
) -> Result<(), TrainerError> {
    if json_mode {
        return write_json(out, &json!({ "event": event, "message": message }));
    }
    writeln!(out, "{}", message)?;
    Ok(())
}

/// Render a recoverable error.
pub fn write_error(
    out: &mut impl Write,
    error: &TrainerError,
    json_mode: bool,
) -> Result<(), TrainerError> {
    if json_mode {
        return write_json(out, &json!({ "event": "error", "error": error.to_string() }));
    }
    writeln!(out, "Error: {}", error)?;
    Ok(())
}
