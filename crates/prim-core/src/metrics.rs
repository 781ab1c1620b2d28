//! # Graph Metrics
//!
//! Summary figures for a graph, computed on demand.

use crate::graph::{Graph, GraphStore};
use crate::solver::kruskal;
use crate::EdgeWeight;
use serde::Serialize;

/// Metrics extracted from a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphMetrics {
    /// Total number of nodes.
    pub node_count: usize,
    /// Total number of edges.
    pub edge_count: usize,
    /// Sum of every edge weight.
    pub total_weight: EdgeWeight,
    /// Connected components, isolated nodes included.
    pub component_count: usize,
    /// Cost of a minimum spanning forest over all components.
    pub forest_cost: EdgeWeight,
}

impl GraphMetrics {
    /// Compute metrics for `graph`.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        let forest = kruskal(graph, graph.node_ids());
        let total_weight = graph
            .edges()
            .iter()
            .fold(EdgeWeight::ZERO, |acc, edge| acc.saturating_add(edge.weight));

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            total_weight,
            component_count: forest.components,
            forest_cost: forest.total_cost,
        }
    }

    /// True when every node is reachable from every other.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_count <= 1
    }
}
