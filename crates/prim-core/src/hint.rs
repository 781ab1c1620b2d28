//! # Hint Issuer
//!
//! Reveals the expected minimum edge and applies it, exactly as if the
//! learner had picked it.

use crate::graph::GraphStore;
use crate::session::Session;
use crate::Edge;

/// The HintIssuer groups hint operations.
pub struct HintIssuer;

impl HintIssuer {
    /// The edge a hint would reveal, without applying it.
    ///
    /// Lets a renderer stage a reveal before calling `issue`.
    #[must_use]
    pub fn peek(session: &Session) -> Option<Edge> {
        if session.is_running() {
            session.expected_min()
        } else {
            None
        }
    }

    /// Reveal and accept the expected minimum.
    ///
    /// No-op returning `None` unless a run is in progress.
    pub fn issue<G: GraphStore + ?Sized>(session: &mut Session, graph: &G) -> Option<Edge> {
        let edge = Self::peek(session)?;
        session.accept(graph, edge);
        tracing::debug!(edge = %edge.pair(), "hint applied");
        Some(edge)
    }
}
