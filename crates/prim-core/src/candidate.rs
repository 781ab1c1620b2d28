//! # Candidate Engine
//!
//! Computes Prim's frontier: the cut-set of edges crossing the visited set
//! and its stable minimum.
//!
//! All functions are pure. Edge-creation order is the tie-break authority:
//! among equal weights the first edge in the cut-set wins.

use crate::graph::GraphStore;
use crate::{Edge, EdgeWeight, NodeId};
use std::collections::BTreeSet;

/// The CandidateEngine groups the frontier computations.
pub struct CandidateEngine;

impl CandidateEngine {
    /// Edges with exactly one endpoint in `visited`, in creation order.
    pub fn cut_set<G: GraphStore + ?Sized>(graph: &G, visited: &BTreeSet<NodeId>) -> Vec<Edge> {
        graph.edges_touching(visited)
    }

    /// The lightest edge of `cut_set`; the first one on ties.
    ///
    /// Returns `None` for an empty cut-set (tree spans its component).
    #[must_use]
    pub fn minimum(cut_set: &[Edge]) -> Option<Edge> {
        // Only a strictly lighter edge replaces the current best.
        let mut best: Option<Edge> = None;
        for edge in cut_set {
            match best {
                Some(current) if edge.weight >= current.weight => {}
                _ => best = Some(*edge),
            }
        }
        best
    }

    /// Weight of the lightest edge in `cut_set`.
    #[must_use]
    pub fn minimum_weight(cut_set: &[Edge]) -> Option<EdgeWeight> {
        cut_set.iter().map(|edge| edge.weight).min()
    }
}

// =============================================================================
// TESTS
// =============================================================================
