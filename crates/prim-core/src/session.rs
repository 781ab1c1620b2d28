//! # Session State Machine
//!
//! One training run of Prim's algorithm.
//!
//! ```text
//!   Idle ──start──▶ Running ──accept (cut-set empty)──▶ Complete
//!    ▲                │  ▲                                  │
//!    │                └──┘ accept (cut-set non-empty)       │
//!    └────────────────────────── reset ─────────────────────┘
//! ```
//!
//! The session reads the graph but never mutates it. Edges are accepted
//! only through the validation policy or the hint issuer, which is why
//! `accept` is crate-private.

use crate::candidate::CandidateEngine;
use crate::graph::GraphStore;
use crate::{Edge, EdgeWeight, EndpointPair, NodeId, PrimError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Run status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// No run in progress.
    #[default]
    Idle,
    /// A run is in progress and accepts picks.
    Running,
    /// The tree spans the start node's component.
    Complete,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// Mutable state of one training run.
#[derive(Debug, Clone, Default)]
pub struct Session {
    status: SessionStatus,
    /// Root of the tree being built.
    start: Option<NodeId>,
    /// The frontier. Uses BTreeSet for deterministic ordering.
    visited: BTreeSet<NodeId>,
    /// Accepted tree edges, in acceptance order.
    accepted: Vec<Edge>,
    /// Current cut-set, in edge-creation order.
    candidates: Vec<Edge>,
    expected_min: Option<Edge>,
    total_cost: EdgeWeight,
}

impl Session {
    /// Create a new idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current run status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// True while picks are being validated.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Root of the current run.
    #[must_use]
    pub fn start_node(&self) -> Option<NodeId> {
        self.start
    }

    /// Nodes already in the tree.
    #[must_use]
    pub fn visited(&self) -> &BTreeSet<NodeId> {
        &self.visited
    }

    /// Tree edges in acceptance order.
    #[must_use]
    pub fn accepted(&self) -> &[Edge] {
        &self.accepted
    }

    /// Edges crossing the frontier, in creation order.
    #[must_use]
    pub fn candidates(&self) -> &[Edge] {
        &self.candidates
    }

    /// The edge Prim's rule (with stable tie-break) adds next.
    #[must_use]
    pub fn expected_min(&self) -> Option<Edge> {
        self.expected_min
    }

    /// Sum of accepted weights.
    #[must_use]
    pub fn total_cost(&self) -> EdgeWeight {
        self.total_cost
    }

    /// The accepted edge on `pair`, if any.
    #[must_use]
    pub fn accepted_on(&self, pair: EndpointPair) -> Option<&Edge> {
        self.accepted.iter().find(|edge| edge.pair() == pair)
    }

    /// The lightest candidate on `pair`, first in creation order on ties.
    #[must_use]
    pub fn candidate_on(&self, pair: EndpointPair) -> Option<Edge> {
        let on_pair: Vec<Edge> = self
            .candidates
            .iter()
            .filter(|edge| edge.pair() == pair)
            .copied()
            .collect();
        CandidateEngine::minimum(&on_pair)
    }

    // =========================================================================
    // TRANSITIONS
    // =========================================================================

    /// Begin a fresh run rooted at `start`.
    ///
    /// Returns `Ok(false)` without touching anything if a run is already in
    /// progress. A completed run is replaced. If `start` has no incident
    /// edges the run completes immediately with an empty tree.
    pub fn start<G: GraphStore + ?Sized>(
        &mut self,
        graph: &G,
        start: NodeId,
    ) -> Result<bool, PrimError> {
        if self.is_running() {
            tracing::debug!(start = %start, "start ignored: run in progress");
            return Ok(false);
        }
        if !graph.contains_node(start) {
            return Err(PrimError::UnknownNode(start));
        }

        self.clear();
        self.start = Some(start);
        self.visited.insert(start);
        self.status = SessionStatus::Running;
        self.recompute(graph);

        tracing::debug!(start = %start, candidates = self.candidates.len(), "session started");
        Ok(true)
    }

    /// Add `edge` to the tree and advance the frontier.
    ///
    /// Callers must have checked that `edge` is a minimum-weight candidate.
    /// Edges that do not cross the frontier leave the session unchanged.
    pub(crate) fn accept<G: GraphStore + ?Sized>(&mut self, graph: &G, edge: Edge) -> SessionStatus {
        if !self.is_running() || !edge.crosses(&self.visited) {
            return self.status;
        }

        self.accepted.push(edge);
        self.visited.insert(edge.a);
        self.visited.insert(edge.b);
        self.total_cost = self.total_cost.saturating_add(edge.weight);
        self.recompute(graph);

        tracing::debug!(
            edge = %edge.pair(),
            weight = edge.weight.value(),
            total = self.total_cost.value(),
            "edge accepted"
        );
        self.status
    }

    /// Recompute the frontier after a graph mutation.
    ///
    /// Only a running session follows the graph; a completed run stays
    /// complete until it is reset or restarted. Once the graph is edited
    /// after completion, `visited` may no longer equal the nodes reachable
    /// from the start.
    pub fn refresh<G: GraphStore + ?Sized>(&mut self, graph: &G) {
        if self.is_running() {
            self.recompute(graph);
        }
    }

    /// Return to `Idle`, clearing every field.
    pub fn reset(&mut self) {
        self.clear();
        tracing::debug!("session reset");
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn recompute<G: GraphStore + ?Sized>(&mut self, graph: &G) {
        self.candidates = CandidateEngine::cut_set(graph, &self.visited);
        self.expected_min = CandidateEngine::minimum(&self.candidates);

        if self.expected_min.is_none() {
            self.status = SessionStatus::Complete;
            tracing::info!(
                start = ?self.start,
                edges = self.accepted.len(),
                total = self.total_cost.value(),
                "spanning tree complete"
            );
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
