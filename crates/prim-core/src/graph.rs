//! # Graph Store
//!
//! The deterministic, append-only graph for the trainer.
//!
//! This module implements the `GraphStore` trait.
//! Nodes live in a `BTreeMap`; edges live in a `Vec` whose order is the
//! creation order, which the candidate engine relies on for tie-breaks.

use crate::{Edge, EdgeDefect, EdgeId, EdgeWeight, EndpointPair, Node, NodeId, Position, PrimError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

// =============================================================================
// DUPLICATE POLICY
// =============================================================================

/// What `add_edge` does when `{a, b}` is already connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with `PrimError::DuplicateEdge`.
    #[default]
    Reject,
    /// Keep parallel edges; the graph becomes a multigraph.
    Multigraph,
}

// =============================================================================
// GRAPHSTORE TRAIT
// =============================================================================

/// The GraphStore trait defines the graph operations the engine reads.
///
/// Mutation is append-only: nodes and edges are never removed.
pub trait GraphStore {
    /// Append a node at `position` and return its freshly assigned id.
    fn add_node(&mut self, position: Position) -> NodeId;

    /// Append an undirected edge.
    ///
    /// Fails with `InvalidEdge` on a self-loop or unknown endpoint and with
    /// `DuplicateEdge` when the pair is taken under `DuplicatePolicy::Reject`.
    fn add_edge(&mut self, a: NodeId, b: NodeId, weight: EdgeWeight) -> Result<Edge, PrimError>;

    /// Lookup a node by id.
    fn node(&self, id: NodeId) -> Option<&Node>;

    /// All edges in creation order.
    fn edges(&self) -> &[Edge];

    /// Edges with exactly one endpoint in `nodes`, in creation order.
    fn edges_touching(&self, nodes: &BTreeSet<NodeId>) -> Vec<Edge> {
        self.edges()
            .iter()
            .filter(|edge| edge.crosses(nodes))
            .copied()
            .collect()
    }

    /// Check if a node exists.
    fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Get the total number of nodes.
    fn node_count(&self) -> usize;

    /// Get the total number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

// =============================================================================
// GRAPH IMPLEMENTATION
// =============================================================================

/// The main Graph structure.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node storage: NodeId -> Node
    nodes: BTreeMap<NodeId, Node>,

    /// Edge storage in creation order. `EdgeId(i)` is `edges[i]`.
    edges: Vec<Edge>,

    /// Pair lookup: EndpointPair -> edges on that pair, in creation order
    pair_index: BTreeMap<EndpointPair, Vec<EdgeId>>,

    /// Parallel edge handling
    policy: DuplicatePolicy,

    /// Next available NodeId
    next_node_id: u64,
}

impl Graph {
    /// Create a new empty graph that rejects duplicate edges.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with the given duplicate policy.
    #[must_use]
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The duplicate policy in force.
    #[must_use]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Get all nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Get all node ids in id order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Get an edge by its creation index.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.0)
    }

    /// Edges joining `pair`, in creation order. At most one under `Reject`.
    pub fn edges_between(&self, pair: EndpointPair) -> impl Iterator<Item = &Edge> + '_ {
        self.pair_index
            .get(&pair)
            .into_iter()
            .flatten()
            .filter_map(|id| self.edge(*id))
    }

    /// Check if any edge joins `pair`.
    #[must_use]
    pub fn contains_pair(&self, pair: EndpointPair) -> bool {
        self.pair_index.contains_key(&pair)
    }

    /// Incident edges of `node` as `(neighbor, edge)`, in creation order.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &Edge)> + '_ {
        self.edges
            .iter()
            .filter_map(move |edge| edge.other(node).map(|other| (other, edge)))
    }

    /// Nodes reachable from `start` (including `start`), breadth first.
    ///
    /// Returns an empty set if `start` does not exist.
    #[must_use]
    pub fn component_of(&self, start: NodeId) -> BTreeSet<NodeId> {
        let mut visited = BTreeSet::new();
        if !self.nodes.contains_key(&start) {
            return visited;
        }

        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for (neighbor, _) in self.neighbors(current) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        visited
    }

    /// Get the next node ID that would be assigned.
    #[must_use]
    pub fn next_node_id(&self) -> u64 {
        self.next_node_id
    }
}

impl GraphStore for Graph {
    fn add_node(&mut self, position: Position) -> NodeId {
        let node_id = NodeId(self.next_node_id);
        self.next_node_id = self.next_node_id.saturating_add(1);
        self.nodes.insert(node_id, Node::new(node_id, position));

        tracing::debug!(node = %node_id, x = position.x, y = position.y, "node added");
        node_id
    }

    fn add_edge(&mut self, a: NodeId, b: NodeId, weight: EdgeWeight) -> Result<Edge, PrimError> {
        let pair = EndpointPair::new(a, b);
        if pair.is_loop() {
            return Err(PrimError::InvalidEdge {
                pair,
                defect: EdgeDefect::SelfLoop,
            });
        }
        for endpoint in [a, b] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(PrimError::InvalidEdge {
                    pair,
                    defect: EdgeDefect::UnknownEndpoint(endpoint),
                });
            }
        }
        if self.policy == DuplicatePolicy::Reject && self.contains_pair(pair) {
            return Err(PrimError::DuplicateEdge(pair));
        }

        let edge = Edge::new(EdgeId(self.edges.len()), a, b, weight);
        self.edges.push(edge);
        self.pair_index.entry(pair).or_default().push(edge.id);

        tracing::debug!(edge = %pair, weight = weight.value(), "edge added");
        Ok(edge)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================
