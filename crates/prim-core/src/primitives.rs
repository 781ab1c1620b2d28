//! # Innate Primitives
//!
//! Hardcoded constants for the trainer core.
//! These are compiled into the binary and are immutable at runtime.

use crate::{EdgeWeight, NodeId};

/// Start node used when the learner has not selected one.
pub const DEFAULT_START: NodeId = NodeId(0);

/// Weight proposed to the learner when a new edge is drafted.
pub const DEFAULT_EDGE_WEIGHT: EdgeWeight = EdgeWeight::new(5);

/// Width of the drawing surface the preset positions are laid out on.
pub const CANVAS_WIDTH: i64 = 800;

/// Height of the drawing surface the preset positions are laid out on.
pub const CANVAS_HEIGHT: i64 = 600;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum number of nodes accepted from a graph file.
///
/// Graph files larger than this are rejected before any node is created.
pub const MAX_GRAPH_NODES: usize = 10_000;

/// Maximum number of edges accepted from a graph file.
pub const MAX_GRAPH_EDGES: usize = 100_000;
