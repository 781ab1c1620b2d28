//! # Presets
//!
//! Built-in graphs for a first session.

use crate::graph::{Graph, GraphStore};
use crate::{EdgeWeight, NodeId, Position, PrimError};

/// Houses of the demo town, as `(x, y)` on an 800x600 canvas.
pub const DEMO_TOWN_HOUSES: [(i64, i64); 5] =
    [(100, 200), (300, 100), (500, 300), (700, 200), (400, 500)];

/// Roads of the demo town, as `(a, b, weight)` in creation order.
pub const DEMO_TOWN_ROADS: [(u64, u64, u64); 7] = [
    (0, 1, 4),
    (0, 2, 8),
    (1, 2, 3),
    (1, 3, 7),
    (2, 3, 2),
    (2, 4, 5),
    (3, 4, 6),
];

/// Five houses and seven roads. Prim from house 0 costs 14.
pub fn demo_town() -> Result<Graph, PrimError> {
    let mut graph = Graph::new();
    for (x, y) in DEMO_TOWN_HOUSES {
        graph.add_node(Position::new(x, y));
    }
    for (a, b, weight) in DEMO_TOWN_ROADS {
        graph.add_edge(NodeId(a), NodeId(b), EdgeWeight::new(weight))?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{CANVAS_HEIGHT, CANVAS_WIDTH};

    #[test]
    fn demo_town_shape() {
        let graph = demo_town().expect("preset");
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 7);
    }

    #[test]
    fn demo_town_fits_canvas() {
        let graph = demo_town().expect("preset");
        for node in graph.nodes() {
            assert!((0..=CANVAS_WIDTH).contains(&node.position.x));
            assert!((0..=CANVAS_HEIGHT).contains(&node.position.y));
        }
    }
}
