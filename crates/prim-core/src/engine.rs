//! # Engine
//!
//! The single owner of the graph and the training session.
//!
//! Every external event (start, pick, hint, reset, add node, add edge) is a
//! method on `Engine`. Each state-changing event finishes its mutation,
//! recomputes the frontier, and then notifies observers with an immutable
//! `Snapshot`. Renderers read snapshots; they never hold engine state.

use crate::draft::EdgeDraft;
use crate::graph::{DuplicatePolicy, Graph, GraphStore};
use crate::hint::HintIssuer;
use crate::primitives::DEFAULT_START;
use crate::session::{Session, SessionStatus};
use crate::solver::{PrimRun, prim};
use crate::validation::{ValidationPolicy, Verdict};
use crate::{Edge, EdgeWeight, EndpointPair, Node, NodeId, Position, PrimError};
use serde::Serialize;
use std::collections::BTreeSet;

// =============================================================================
// SNAPSHOT & OBSERVER
// =============================================================================

/// Immutable view of engine state after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Run status.
    pub status: SessionStatus,
    /// Start node the next run will use.
    pub selected_start: NodeId,
    /// Root of the current run, if any.
    pub start: Option<NodeId>,
    /// Nodes in the tree.
    pub visited: Vec<NodeId>,
    /// Tree edges in acceptance order.
    pub accepted: Vec<Edge>,
    /// Frontier edges in creation order.
    pub candidates: Vec<Edge>,
    /// The edge a hint would reveal.
    pub expected_min: Option<Edge>,
    /// Sum of accepted weights.
    pub total_cost: EdgeWeight,
    /// Pending edge creation.
    pub draft: EdgeDraft,
    /// All nodes.
    pub nodes: Vec<Node>,
    /// All edges in creation order.
    pub edges: Vec<Edge>,
}

/// Receives a snapshot after every state-changing event.
pub trait Observer {
    /// Called once per event, after the engine is consistent again.
    fn notify(&mut self, snapshot: &Snapshot);
}

impl<F: FnMut(&Snapshot)> Observer for F {
    fn notify(&mut self, snapshot: &Snapshot) {
        self(snapshot);
    }
}

// =============================================================================
// ENGINE
// =============================================================================

/// Graph plus session, with all trainer operations as methods.
#[derive(Default)]
pub struct Engine {
    graph: Graph,
    session: Session,
    selected_start: NodeId,
    draft: EdgeDraft,
    observers: Vec<Box<dyn Observer>>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("graph", &self.graph)
            .field("session", &self.session)
            .field("selected_start", &self.selected_start)
            .field("draft", &self.draft)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Engine {
    /// Create an engine over an empty graph that rejects duplicate edges.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine over an empty graph with the given duplicate policy.
    #[must_use]
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self::with_graph(Graph::with_policy(policy))
    }

    /// Create an engine over an existing graph.
    #[must_use]
    pub fn with_graph(graph: Graph) -> Self {
        Self {
            graph,
            selected_start: DEFAULT_START,
            ..Self::default()
        }
    }

    /// Register an observer. It is notified after every later event.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    // =========================================================================
    // OBSERVERS
    // =========================================================================

    /// The graph (read-only).
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The session (read-only).
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current run status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    /// Nodes in the tree.
    #[must_use]
    pub fn visited(&self) -> &BTreeSet<NodeId> {
        self.session.visited()
    }

    /// Tree edges in acceptance order.
    #[must_use]
    pub fn accepted(&self) -> &[Edge] {
        self.session.accepted()
    }

    /// Frontier edges in creation order.
    #[must_use]
    pub fn candidates(&self) -> &[Edge] {
        self.session.candidates()
    }

    /// The edge Prim adds next.
    #[must_use]
    pub fn expected_min(&self) -> Option<Edge> {
        self.session.expected_min()
    }

    /// Sum of accepted weights.
    #[must_use]
    pub fn total_cost(&self) -> EdgeWeight {
        self.session.total_cost()
    }

    /// Start node the next run will use.
    #[must_use]
    pub fn selected_start(&self) -> NodeId {
        self.selected_start
    }

    /// Pending edge creation.
    #[must_use]
    pub fn draft(&self) -> EdgeDraft {
        self.draft
    }

    /// Build an immutable snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.session.status(),
            selected_start: self.selected_start,
            start: self.session.start_node(),
            visited: self.session.visited().iter().copied().collect(),
            accepted: self.session.accepted().to_vec(),
            candidates: self.session.candidates().to_vec(),
            expected_min: self.session.expected_min(),
            total_cost: self.session.total_cost(),
            draft: self.draft,
            nodes: self.graph.nodes().cloned().collect(),
            edges: self.graph.edges().to_vec(),
        }
    }

    // =========================================================================
    // SESSION EVENTS
    // =========================================================================

    /// Choose the start node for the next run without starting it.
    pub fn select_start(&mut self, node: NodeId) -> Result<(), PrimError> {
        if !self.graph.contains_node(node) {
            return Err(PrimError::UnknownNode(node));
        }
        self.selected_start = node;
        self.emit();
        Ok(())
    }

    /// Start a run from `node`.
    ///
    /// Returns `Ok(false)` if a run is already in progress (nothing changes).
    pub fn start_session(&mut self, node: NodeId) -> Result<bool, PrimError> {
        let started = self.session.start(&self.graph, node)?;
        if started {
            self.selected_start = node;
            self.emit();
        }
        Ok(started)
    }

    /// Start a run from the selected start node.
    pub fn start_selected(&mut self) -> Result<bool, PrimError> {
        self.start_session(self.selected_start)
    }

    /// Abandon the run and any pending edge draft.
    pub fn reset(&mut self) {
        self.session.reset();
        self.draft = EdgeDraft::Empty;
        self.emit();
    }

    /// Validate a learner's pick.
    pub fn pick_edge(&mut self, pair: impl Into<EndpointPair>) -> Verdict {
        let verdict = ValidationPolicy::apply(&mut self.session, &self.graph, pair.into());
        if verdict.is_accepted() {
            self.emit();
        }
        verdict
    }

    /// Reveal and apply the next Prim edge.
    pub fn request_hint(&mut self) -> Option<Edge> {
        let edge = HintIssuer::issue(&mut self.session, &self.graph)?;
        self.emit();
        Some(edge)
    }

    /// The full Prim sequence from `start`, without touching the session.
    pub fn solve(&self, start: NodeId) -> Result<PrimRun, PrimError> {
        prim(&self.graph, start)
    }

    // =========================================================================
    // GRAPH EVENTS
    // =========================================================================

    /// Add a node. Always succeeds.
    pub fn add_node(&mut self, position: Position) -> NodeId {
        let id = self.graph.add_node(position);
        self.session.refresh(&self.graph);
        self.emit();
        id
    }

    /// Add an edge with a checked weight.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: EdgeWeight) -> Result<Edge, PrimError> {
        let edge = self.graph.add_edge(a, b, weight)?;
        self.session.refresh(&self.graph);
        self.emit();
        Ok(edge)
    }

    /// Add an edge from raw weight input.
    ///
    /// Fails with `InvalidWeight` on non-numeric or negative input before
    /// any endpoint check.
    pub fn add_edge_input(&mut self, a: NodeId, b: NodeId, raw: &str) -> Result<Edge, PrimError> {
        let weight: EdgeWeight = raw.parse()?;
        self.add_edge(a, b, weight)
    }

    // =========================================================================
    // EDGE DRAFT
    // =========================================================================

    /// Select a node for a pending edge.
    pub fn select_endpoint(&mut self, node: NodeId) -> Result<EdgeDraft, PrimError> {
        if !self.graph.contains_node(node) {
            return Err(PrimError::UnknownNode(node));
        }
        self.draft = self.draft.select(node);
        self.emit();
        Ok(self.draft)
    }

    /// Abandon the pending edge.
    pub fn cancel_edge(&mut self) {
        if self.draft.is_pending() {
            self.draft = EdgeDraft::Empty;
            self.emit();
        }
    }

    /// Turn a ready draft into an edge using raw weight input.
    ///
    /// On success the draft is cleared. On `InvalidWeight` the draft is kept
    /// so the weight can be re-entered; structural errors clear it.
    pub fn commit_edge(&mut self, raw_weight: &str) -> Result<Edge, PrimError> {
        let (a, b) = self.draft.endpoints().ok_or(PrimError::DraftIncomplete)?;
        let weight: EdgeWeight = raw_weight.parse()?;
        self.draft = EdgeDraft::Empty;
        match self.add_edge(a, b, weight) {
            Ok(edge) => Ok(edge),
            Err(err) => {
                self.emit();
                Err(err)
            }
        }
    }

    fn emit(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.notify(&snapshot);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
