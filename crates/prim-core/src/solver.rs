//! # Solver
//!
//! Runs Prim's algorithm end to end without a learner, plus a Kruskal
//! spanning forest used as an independent reference.
//!
//! `prim` drives the same `Session` transitions a learner does, one hint
//! at a time, so its sequence is exactly what hints would reveal.

use crate::graph::GraphStore;
use crate::hint::HintIssuer;
use crate::session::Session;
use crate::{Edge, EdgeWeight, NodeId, PrimError};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A complete Prim run from one start node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimRun {
    /// Root of the tree.
    pub start: NodeId,
    /// Tree edges in the order Prim adds them.
    pub steps: Vec<Edge>,
    /// Nodes spanned by the tree.
    pub visited: BTreeSet<NodeId>,
    /// Sum of step weights.
    pub total_cost: EdgeWeight,
}

/// Run Prim's algorithm from `start` to completion.
///
/// Fails with `UnknownNode` if `start` does not exist.
pub fn prim<G: GraphStore + ?Sized>(graph: &G, start: NodeId) -> Result<PrimRun, PrimError> {
    let mut session = Session::new();
    session.start(graph, start)?;
    while HintIssuer::issue(&mut session, graph).is_some() {}

    Ok(PrimRun {
        start,
        steps: session.accepted().to_vec(),
        visited: session.visited().clone(),
        total_cost: session.total_cost(),
    })
}

// =============================================================================
// KRUSKAL REFERENCE
// =============================================================================

/// Union-Find over node ids with path compression and union by rank.
struct DisjointSets {
    parent: BTreeMap<NodeId, NodeId>,
    rank: BTreeMap<NodeId, u32>,
}

impl DisjointSets {
    fn new(nodes: impl Iterator<Item = NodeId>) -> Self {
        let parent: BTreeMap<_, _> = nodes.map(|n| (n, n)).collect();
        let rank = parent.keys().map(|&n| (n, 0)).collect();
        Self { parent, rank }
    }

    fn find(&mut self, node: NodeId) -> NodeId {
        let mut root = node;
        while let Some(&p) = self.parent.get(&root) {
            if p == root {
                break;
            }
            root = p;
        }
        // Path compression
        let mut current = node;
        while current != root {
            let next = self.parent.get(&current).copied().unwrap_or(root);
            self.parent.insert(current, root);
            current = next;
        }
        root
    }

    fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        let rank_a = self.rank.get(&ra).copied().unwrap_or(0);
        let rank_b = self.rank.get(&rb).copied().unwrap_or(0);
        if rank_a < rank_b {
            self.parent.insert(ra, rb);
        } else {
            self.parent.insert(rb, ra);
            if rank_a == rank_b {
                self.rank.insert(ra, rank_a.saturating_add(1));
            }
        }
        true
    }
}

/// A minimum spanning forest over a set of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningForest {
    /// Forest edges in ascending weight order.
    pub edges: Vec<Edge>,
    /// Number of connected components (isolated nodes included).
    pub components: usize,
    /// Sum of forest edge weights.
    pub total_cost: EdgeWeight,
}

/// Kruskal's algorithm restricted to `nodes`.
///
/// Edges with an endpoint outside `nodes` are ignored. Edges are sorted by
/// weight with creation order breaking ties.
pub fn kruskal<G: GraphStore + ?Sized>(
    graph: &G,
    nodes: impl Iterator<Item = NodeId>,
) -> SpanningForest {
    let mut sets = DisjointSets::new(nodes);
    let mut components = sets.parent.len();

    let mut sorted: Vec<Edge> = graph.edges().to_vec();
    sorted.sort_by_key(|edge| (edge.weight, edge.id));

    let mut edges = Vec::new();
    let mut total_cost = EdgeWeight::ZERO;
    for edge in sorted {
        if !sets.parent.contains_key(&edge.a) || !sets.parent.contains_key(&edge.b) {
            continue;
        }
        if sets.union(edge.a, edge.b) {
            components = components.saturating_sub(1);
            total_cost = total_cost.saturating_add(edge.weight);
            edges.push(edge);
        }
    }

    SpanningForest {
        edges,
        components,
        total_cost,
    }
}

// =============================================================================
// TESTS
// =============================================================================
