//! # Validation Policy
//!
//! Classifies a learner's edge pick and applies the resulting transition.
//!
//! Classification order while a run is in progress:
//! 1. `AlreadyInTree` - the pair is already a tree edge
//! 2. `NotCandidate` - the pair does not cross the frontier
//! 3. `Correct` - the pick weighs as much as the lightest candidate
//! 4. `WrongMinimum` - a lighter candidate exists
//!
//! Any minimum-weight candidate counts as correct, not only the one the
//! stable tie-break would choose. Picks outside a running session are
//! `Ignored`. None of these verdicts are errors.

use crate::candidate::CandidateEngine;
use crate::graph::GraphStore;
use crate::session::Session;
use crate::{Edge, EdgeWeight, EndpointPair};
use serde::Serialize;

/// Outcome of a learner pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// No run in progress; nothing happened.
    Ignored,
    /// The pair is already part of the tree.
    AlreadyInTree {
        /// The tree edge on that pair.
        edge: Edge,
    },
    /// The pair does not cross the frontier (or is not an edge at all).
    NotCandidate {
        /// The pair the learner picked.
        pair: EndpointPair,
    },
    /// The pick was a minimum-weight candidate and has been accepted.
    Correct {
        /// The accepted edge.
        edge: Edge,
    },
    /// The pick was a candidate but a lighter one exists.
    WrongMinimum {
        /// The picked candidate.
        edge: Edge,
        /// Weight of the lightest candidate.
        expected: EdgeWeight,
    },
}

impl Verdict {
    /// True if the pick changed the session.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    /// True for the three pedagogical rejections.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::AlreadyInTree { .. } | Self::NotCandidate { .. } | Self::WrongMinimum { .. }
        )
    }

    /// Short message for the learner.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Ignored => "No run in progress (idle or complete).".to_string(),
            Self::AlreadyInTree { edge } => {
                format!("Edge {} is already in the tree.", edge.pair())
            }
            Self::NotCandidate { pair } => {
                format!("Edge {} does not connect the tree to a new node.", pair)
            }
            Self::Correct { edge } => format!("Correct! Added {}.", edge),
            Self::WrongMinimum { edge, expected } => format!(
                "Edge {} costs {}, but a cheaper road costs {}.",
                edge.pair(),
                edge.weight,
                expected
            ),
        }
    }
}

/// The ValidationPolicy groups classification and application of picks.
pub struct ValidationPolicy;

impl ValidationPolicy {
    /// Classify a pick against the session without changing it.
    ///
    /// `Correct` here means the pick would be accepted.
    #[must_use]
    pub fn classify(session: &Session, pair: EndpointPair) -> Verdict {
        if !session.is_running() {
            return Verdict::Ignored;
        }

        if let Some(edge) = session.accepted_on(pair) {
            return Verdict::AlreadyInTree { edge: *edge };
        }

        let Some(edge) = session.candidate_on(pair) else {
            return Verdict::NotCandidate { pair };
        };

        match CandidateEngine::minimum_weight(session.candidates()) {
            Some(expected) if edge.weight > expected => Verdict::WrongMinimum { edge, expected },
            _ => Verdict::Correct { edge },
        }
    }

    /// Classify a pick and, if correct, accept it into the tree.
    pub fn apply<G: GraphStore + ?Sized>(
        session: &mut Session,
        graph: &G,
        pair: EndpointPair,
    ) -> Verdict {
        let verdict = Self::classify(session, pair);
        if let Verdict::Correct { edge } = verdict {
            session.accept(graph, edge);
        }

        tracing::debug!(pair = %pair, ?verdict, "pick validated");
        verdict
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStatus;
    use crate::{Graph, NodeId, Position};

    /// Square 0-1-2-3 with a tie at the start: 0-1 and 0-3 both weigh 1.
    fn tied_square() -> Graph {
        let mut graph = Graph::new();
        for _ in 0..4 {
            graph.add_node(Position::default());
        }
        for (a, b, w) in [(0, 1, 1), (1, 2, 5), (2, 3, 2), (0, 3, 1)] {
            graph
                .add_edge(NodeId(a), NodeId(b), EdgeWeight::new(w))
                .expect("edge");
        }
        graph
    }

    fn running(graph: &Graph) -> Session {
        let mut session = Session::new();
        session.start(graph, NodeId(0)).expect("start");
        session
    }

    #[test]
    fn idle_pick_is_ignored() {
        let graph = tied_square();
        let mut session = Session::new();
        let verdict = ValidationPolicy::apply(&mut session, &graph, (0, 1).into());
        assert_eq!(verdict, Verdict::Ignored);
        assert!(!verdict.is_rejection());
    }

    #[test]
    fn tie_loser_is_still_correct() {
        let graph = tied_square();
        let mut session = running(&graph);
        assert_eq!(
            session.expected_min().map(|e| e.pair()),
            Some(EndpointPair::from((0, 1)))
        );

        let verdict = ValidationPolicy::apply(&mut session, &graph, (3, 0).into());
        assert!(verdict.is_accepted());
        assert_eq!(session.total_cost(), EdgeWeight::new(1));
        assert!(session.visited().contains(&NodeId(3)));
    }

    #[test]
    fn heavier_candidate_is_wrong_minimum() {
        let graph = tied_square();
        let mut session = running(&graph);
        ValidationPolicy::apply(&mut session, &graph, (0, 1).into());

        let verdict = ValidationPolicy::apply(&mut session, &graph, (1, 2).into());
        assert!(matches!(
            verdict,
            Verdict::WrongMinimum { expected, .. } if expected == EdgeWeight::new(1)
        ));
        assert_eq!(session.accepted().len(), 1);
    }

    #[test]
    fn accepted_edge_is_already_in_tree() {
        let graph = tied_square();
        let mut session = running(&graph);
        ValidationPolicy::apply(&mut session, &graph, (0, 1).into());

        let before = session.total_cost();
        let verdict = ValidationPolicy::apply(&mut session, &graph, (1, 0).into());
        assert!(matches!(verdict, Verdict::AlreadyInTree { .. }));
        assert_eq!(session.total_cost(), before);
    }

    #[test]
    fn non_crossing_and_missing_edges_are_not_candidates() {
        let graph = tied_square();
        let mut session = running(&graph);

        for pair in [(2, 3), (1, 3), (0, 0), (0, 99)] {
            let verdict = ValidationPolicy::apply(&mut session, &graph, pair.into());
            assert!(matches!(verdict, Verdict::NotCandidate { .. }), "{pair:?}");
        }
        assert!(session.accepted().is_empty());
    }

    #[test]
    fn classify_does_not_mutate() {
        let graph = tied_square();
        let session = running(&graph);
        let verdict = ValidationPolicy::classify(&session, (0, 1).into());
        assert!(verdict.is_accepted());
        assert!(session.accepted().is_empty());
    }

    #[test]
    fn last_correct_pick_completes() {
        let graph = tied_square();
        let mut session = running(&graph);
        for pair in [(0, 1), (0, 3), (2, 3)] {
            assert!(ValidationPolicy::apply(&mut session, &graph, pair.into()).is_accepted());
        }
        assert_eq!(session.status(), SessionStatus::Complete);
        assert_eq!(session.total_cost(), EdgeWeight::new(4));

        let verdict = ValidationPolicy::apply(&mut session, &graph, (1, 2).into());
        assert_eq!(verdict, Verdict::Ignored);
    }

    #[test]
    fn verdict_json_is_tagged() {
        let graph = tied_square();
        let mut session = running(&graph);
        ValidationPolicy::apply(&mut session, &graph, (0, 1).into());
        let verdict = ValidationPolicy::classify(&session, (1, 2).into());

        let json = serde_json::to_value(verdict).expect("json");
        assert_eq!(json["verdict"], "wrong_minimum");
        assert_eq!(json["edge"]["a"], 1);
        assert_eq!(json["edge"]["b"], 2);
        assert_eq!(json["edge"]["weight"], 5);
        assert_eq!(json["expected"], 1);

        let json = serde_json::to_value(Verdict::Ignored).expect("json");
        assert_eq!(json, serde_json::json!({ "verdict": "ignored" }));
    }
}
