//! # Core Type Definitions
//!
//! This module contains the core types shared by every engine component:
//! - Identifiers (`NodeId`, `EdgeId`)
//! - Weights (`EdgeWeight`) and display positions (`Position`)
//! - Graph elements (`Node`, `Edge`, `EndpointPair`)
//! - Error types (`PrimError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Use saturating arithmetic for cost accumulation

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique identifier for a node. Assigned monotonically from 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an edge in creation order.
///
/// Creation order is the tie-break authority for the stable minimum,
/// so this index is also the edge's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub usize);

// =============================================================================
// WEIGHT
// =============================================================================

/// Non-negative integer weight of an undirected edge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EdgeWeight(pub u64);

impl EdgeWeight {
    /// The zero weight (empty tree cost).
    pub const ZERO: Self = Self(0);

    /// Create a new edge weight.
    #[must_use]
    pub const fn new(weight: u64) -> Self {
        Self(weight)
    }

    /// Get the raw weight value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Add two weights, saturating at `u64::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Convert a signed weight, rejecting negatives with `InvalidWeight`.
    pub fn from_signed(raw: i64) -> Result<Self, PrimError> {
        u64::try_from(raw)
            .map(Self)
            .map_err(|_| PrimError::InvalidWeight(raw.to_string()))
    }
}

impl FromStr for EdgeWeight {
    type Err = PrimError;

    /// Parse learner input. Only plain decimal digits are accepted;
    /// signs, fractions and empty input fail with `InvalidWeight`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PrimError::InvalidWeight(raw.to_string()));
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| PrimError::InvalidWeight(raw.to_string()))
    }
}

impl fmt::Display for EdgeWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// NODE
// =============================================================================

/// Display position of a node. Opaque to the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A node in the graph. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// The node identifier.
    pub id: NodeId,
    /// Where the renderer draws this node.
    pub position: Position,
}

impl Node {
    /// Create a new node.
    #[must_use]
    pub const fn new(id: NodeId, position: Position) -> Self {
        Self { id, position }
    }
}

// =============================================================================
// EDGE
// =============================================================================

/// Unordered pair of node ids, stored as `(min, max)`.
///
/// `EndpointPair::new(a, b) == EndpointPair::new(b, a)` for every `a`, `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EndpointPair {
    low: NodeId,
    high: NodeId,
}

impl EndpointPair {
    /// Create a normalised pair from two endpoints in any order.
    #[must_use]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The smaller endpoint.
    #[must_use]
    pub const fn low(&self) -> NodeId {
        self.low
    }

    /// The larger endpoint.
    #[must_use]
    pub const fn high(&self) -> NodeId {
        self.high
    }

    /// True when both endpoints are the same node.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.low == self.high
    }
}

impl From<(NodeId, NodeId)> for EndpointPair {
    fn from((a, b): (NodeId, NodeId)) -> Self {
        Self::new(a, b)
    }
}

impl From<(u64, u64)> for EndpointPair {
    fn from((a, b): (u64, u64)) -> Self {
        Self::new(NodeId(a), NodeId(b))
    }
}

impl fmt::Display for EndpointPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// An undirected weighted edge.
///
/// `a` and `b` keep the order the edge was created with so that
/// renderers and logs can echo it back; all matching goes through `pair()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Index in creation order.
    pub id: EdgeId,
    /// First endpoint as created.
    pub a: NodeId,
    /// Second endpoint as created.
    pub b: NodeId,
    /// Edge weight.
    pub weight: EdgeWeight,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(id: EdgeId, a: NodeId, b: NodeId, weight: EdgeWeight) -> Self {
        Self { id, a, b, weight }
    }

    /// The unordered endpoint pair.
    #[must_use]
    pub fn pair(&self) -> EndpointPair {
        EndpointPair::new(self.a, self.b)
    }

    /// True when exactly one endpoint is in `nodes`.
    #[must_use]
    pub fn crosses(&self, nodes: &BTreeSet<NodeId>) -> bool {
        nodes.contains(&self.a) ^ nodes.contains(&self.b)
    }

    /// The endpoint opposite to `node`, if `node` is an endpoint.
    #[must_use]
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.a == node {
            Some(self.b)
        } else if self.b == node {
            Some(self.a)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} - {}, cost {})", self.a, self.b, self.weight)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Why an edge was structurally invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDefect {
    /// Both endpoints are the same node.
    SelfLoop,
    /// The given endpoint does not exist.
    UnknownEndpoint(NodeId),
}

impl fmt::Display for EdgeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop => write!(f, "self-loop"),
            Self::UnknownEndpoint(id) => write!(f, "unknown endpoint {}", id),
        }
    }
}

/// Errors that can occur in the trainer core.
///
/// - Every error is local and recoverable
/// - Learner verdicts (already in tree, not a candidate, wrong minimum) are
///   NOT errors; see `validation::Verdict`
/// - The core never panics
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimError {
    /// Self-loop or unknown endpoint.
    #[error("Invalid edge {pair}: {defect}")]
    InvalidEdge {
        /// The rejected endpoints.
        pair: EndpointPair,
        /// What was wrong with them.
        defect: EdgeDefect,
    },

    /// An edge already connects this pair and parallel edges are rejected.
    #[error("Duplicate edge {0}")]
    DuplicateEdge(EndpointPair),

    /// Weight input was non-numeric or negative.
    #[error("Invalid weight: {0:?}")]
    InvalidWeight(String),

    /// The requested node was not found in the graph.
    #[error("Node not found: {0}")]
    UnknownNode(NodeId),

    /// An edge draft was committed before both endpoints were chosen.
    #[error("Edge draft needs two endpoints before a weight")]
    DraftIncomplete,
}

// =============================================================================
// TESTS
// =============================================================================
