//! # prim-core
//!
//! The graph model and step-by-step validation engine for learning Prim's
//! minimum-spanning-tree algorithm - THE LOGIC.
//!
//! A learner repeatedly picks the edge they believe Prim would add next.
//! The engine validates the pick against the frontier, grows the tree, and
//! tracks the total cost until the start node's component is spanned.
//!
//! ## Components
//!
//! - `graph` - append-only node/edge store (`GraphStore`, `Graph`)
//! - `candidate` - cut-set and stable minimum (`CandidateEngine`)
//! - `session` - the Idle/Running/Complete state machine (`Session`)
//! - `validation` - pick classification (`ValidationPolicy`, `Verdict`)
//! - `hint` - reveal and apply the next edge (`HintIssuer`)
//! - `engine` - single owner of graph and session (`Engine`, `Snapshot`)
//!
//! ## Architectural Constraints
//!
//! - Synchronous and single-threaded; no I/O
//! - Deterministic: BTree collections only, integer weights only
//! - Rendering is a consumer of `Snapshot`s and never a source of truth
//!
//! ## Example
//!
//! ```
//! use prim_core::{Engine, EdgeWeight, NodeId, SessionStatus, preset::demo_town};
//!
//! let mut engine = Engine::with_graph(demo_town().expect("preset"));
//! engine.start_session(NodeId(0)).expect("start");
//!
//! assert!(engine.pick_edge((0, 1)).is_accepted());
//! assert!(!engine.pick_edge((1, 3)).is_accepted());
//! while engine.request_hint().is_some() {}
//!
//! assert_eq!(engine.status(), SessionStatus::Complete);
//! assert_eq!(engine.total_cost(), EdgeWeight::new(14));
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod candidate;
pub mod draft;
pub mod engine;
pub mod graph;
pub mod hint;
pub mod metrics;
pub mod preset;
pub mod primitives;
pub mod session;
pub mod solver;
pub mod types;
pub mod validation;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Edge, EdgeDefect, EdgeId, EdgeWeight, EndpointPair, Node, NodeId, Position, PrimError,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use candidate::CandidateEngine;
pub use draft::EdgeDraft;
pub use engine::{Engine, Observer, Snapshot};
pub use graph::{DuplicatePolicy, Graph, GraphStore};
pub use hint::HintIssuer;
pub use metrics::GraphMetrics;
pub use session::{Session, SessionStatus};
pub use solver::{PrimRun, SpanningForest, kruskal, prim};
pub use validation::{ValidationPolicy, Verdict};
