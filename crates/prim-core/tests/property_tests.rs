//! # Property-Based Tests
//!
//! Correctness invariants of the trainer, checked with proptest against
//! randomly generated graphs and a Kruskal reference.

use prim_core::{
    CandidateEngine, EdgeWeight, Engine, Graph, GraphStore, NodeId, Position, SessionStatus,
    Verdict, kruskal,
};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Node count plus raw `(a, b, weight)` triples. Self-loops and duplicates
/// are generated on purpose and rejected by the graph.
fn graph_input() -> impl Strategy<Value = (u64, Vec<(u64, u64, u64)>)> {
    (1u64..12).prop_flat_map(|nodes| {
        (
            Just(nodes),
            vec((0..nodes, 0..nodes, 0u64..20), 0..40),
        )
    })
}

fn build_graph(nodes: u64, edges: &[(u64, u64, u64)]) -> Graph {
    let mut graph = Graph::new();
    for i in 0..nodes {
        graph.add_node(Position::new(i as i64, 0));
    }
    for &(a, b, w) in edges {
        let _ = graph.add_edge(NodeId(a), NodeId(b), EdgeWeight::new(w));
    }
    graph
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Hints reach a tree as cheap as Kruskal's over the start component.
    #[test]
    fn hinted_run_matches_reference(
        (nodes, edges) in graph_input(),
        start_seed in 0u64..12
    ) {
        let graph = build_graph(nodes, &edges);
        let start = NodeId(start_seed % nodes);
        let component = graph.component_of(start);
        let reference = kruskal(&graph, component.iter().copied());

        let mut engine = Engine::with_graph(graph);
        engine.start_session(start).expect("start");
        while engine.request_hint().is_some() {}

        prop_assert_eq!(engine.status(), SessionStatus::Complete);
        prop_assert_eq!(engine.total_cost(), reference.total_cost);
        prop_assert_eq!(engine.visited(), &component);
    }

    /// Each accepted edge grows visited by one and cost by its weight.
    #[test]
    fn cost_and_frontier_grow_in_lockstep(
        (nodes, edges) in graph_input(),
        start_seed in 0u64..12
    ) {
        let graph = build_graph(nodes, &edges);
        let mut engine = Engine::with_graph(graph);
        engine.start_session(NodeId(start_seed % nodes)).expect("start");

        loop {
            let visited_before = engine.visited().len();
            let cost_before = engine.total_cost();
            let Some(edge) = engine.request_hint() else { break };

            prop_assert_eq!(engine.visited().len(), visited_before + 1);
            prop_assert_eq!(engine.total_cost(), cost_before.saturating_add(edge.weight));
            prop_assert_eq!(engine.accepted().len() + 1, engine.visited().len());

            let sum = engine
                .accepted()
                .iter()
                .fold(EdgeWeight::ZERO, |acc, e| acc.saturating_add(e.weight));
            prop_assert_eq!(engine.total_cost(), sum);
        }
    }

    /// Any minimum-weight candidate is accepted, and picking the last tied
    /// candidate every time still builds a minimum tree.
    #[test]
    fn tie_losers_still_build_minimum_tree(
        (nodes, edges) in graph_input(),
        start_seed in 0u64..12
    ) {
        let graph = build_graph(nodes, &edges);
        let start = NodeId(start_seed % nodes);
        let reference = kruskal(&graph, graph.component_of(start).into_iter());

        let mut engine = Engine::with_graph(graph);
        engine.start_session(start).expect("start");

        while engine.status() == SessionStatus::Running {
            let min = CandidateEngine::minimum_weight(engine.candidates()).expect("running");
            let last_tied = engine
                .candidates()
                .iter()
                .rev()
                .find(|e| e.weight == min)
                .copied()
                .expect("tied candidate");
            let verdict = engine.pick_edge(last_tied.pair());
            prop_assert!(verdict.is_accepted(), "{:?}", verdict);
        }

        prop_assert_eq!(engine.total_cost(), reference.total_cost);
    }

    /// Re-picking an accepted edge never changes state.
    #[test]
    fn accepted_pick_is_already_in_tree(
        (nodes, edges) in graph_input(),
        steps in 1usize..6
    ) {
        let graph = build_graph(nodes, &edges);
        let mut engine = Engine::with_graph(graph);
        engine.start_session(NodeId(0)).expect("start");
        for _ in 0..steps {
            if engine.request_hint().is_none() {
                break;
            }
        }
        if engine.status() != SessionStatus::Running {
            return Ok(());
        }

        let before = engine.snapshot();
        for edge in before.accepted.clone() {
            let verdict = engine.pick_edge(edge.pair());
            let is_already_in_tree = matches!(verdict, Verdict::AlreadyInTree { .. });
            prop_assert!(is_already_in_tree);
        }
        prop_assert_eq!(engine.snapshot(), before);
    }

    /// Edges outside the cut-set are never candidates.
    #[test]
    fn non_cut_edges_are_not_candidates(
        (nodes, edges) in graph_input(),
        steps in 0usize..6
    ) {
        let graph = build_graph(nodes, &edges);
        let mut engine = Engine::with_graph(graph);
        engine.start_session(NodeId(0)).expect("start");
        for _ in 0..steps {
            if engine.request_hint().is_none() {
                break;
            }
        }
        if engine.status() != SessionStatus::Running {
            return Ok(());
        }

        let all_edges = engine.graph().edges().to_vec();
        for edge in all_edges {
            if edge.crosses(engine.visited()) || engine.session().accepted_on(edge.pair()).is_some() {
                continue;
            }
            let verdict = engine.pick_edge(edge.pair());
            let is_not_candidate = matches!(verdict, Verdict::NotCandidate { .. });
            prop_assert!(is_not_candidate);
        }
    }

    /// A hint reaches the same state as picking the expected minimum.
    #[test]
    fn hint_equals_manual_pick(
        (nodes, edges) in graph_input(),
        start_seed in 0u64..12
    ) {
        let graph = build_graph(nodes, &edges);
        let start = NodeId(start_seed % nodes);

        let mut hinted = Engine::with_graph(graph.clone());
        let mut picked = Engine::with_graph(graph);
        hinted.start_session(start).expect("start");
        picked.start_session(start).expect("start");

        while let Some(expected) = picked.expected_min() {
            prop_assert!(picked.pick_edge(expected.pair()).is_accepted());
            prop_assert_eq!(hinted.request_hint(), Some(expected));
            prop_assert_eq!(hinted.snapshot(), picked.snapshot());
        }
    }
}
