//! # CLI Command Implementations

use prim_core::{GraphMetrics, GraphStore, NodeId};
use prim_trainer::{GraphConfig, Repl, TrainerError, report};
use std::io::Write;
use std::path::Path;

// =============================================================================
// PLAY COMMAND
// =============================================================================

/// Run the interactive play loop on stdin/stdout.
pub fn cmd_play(config: Option<&Path>, json_mode: bool) -> Result<(), TrainerError> {
    let graph = GraphConfig::load(config)?;
    let engine = graph.build_engine()?;
    tracing::info!(
        nodes = engine.graph().node_count(),
        edges = engine.graph().edge_count(),
        "Play loop ready"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !json_mode {
        writeln!(out, "Type 'help' for commands, 'start' to begin.")?;
    }

    let mut repl = Repl::new(engine, json_mode);
    repl.run(stdin.lock(), &mut out)
}

// =============================================================================
// SOLVE COMMAND
// =============================================================================

/// Print the whole Prim run from the chosen start node.
pub fn cmd_solve(
    config: Option<&Path>,
    json_mode: bool,
    start: Option<u64>,
) -> Result<(), TrainerError> {
    let graph = GraphConfig::load(config)?;
    let start = start.map(NodeId).unwrap_or_else(|| graph.start_node());
    let engine = graph.build_engine()?;

    let run = engine.solve(start)?;
    tracing::info!(
        start = %run.start,
        steps = run.steps.len(),
        total_cost = %run.total_cost,
        "Solved"
    );

    let stdout = std::io::stdout();
    report::write_run(&mut stdout.lock(), &run, json_mode)
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Build the graph and print its metrics.
pub fn cmd_check(config: Option<&Path>, json_mode: bool) -> Result<(), TrainerError> {
    let graph = GraphConfig::load(config)?.build_graph()?;
    let metrics = GraphMetrics::from_graph(&graph);

    let stdout = std::io::stdout();
    report::write_metrics(&mut stdout.lock(), &metrics, json_mode)
}
