//! # Graph Configuration
//!
//! Loads a starting graph from a TOML file.
//!
//! ```toml
//! duplicate_policy = "reject"   # or "multigraph"
//! start = 0
//!
//! [[nodes]]
//! x = 100
//! y = 200
//!
//! [[nodes]]
//! x = 300
//! y = 100
//!
//! [[edges]]
//! a = 0
//! b = 1
//! weight = 4
//! ```
//!
//! Nodes get ids in file order starting at 0. Without a file the built-in
//! demo town is used.

use crate::TrainerError;
use prim_core::preset::{DEMO_TOWN_HOUSES, DEMO_TOWN_ROADS};
use prim_core::primitives::{DEFAULT_START, MAX_GRAPH_EDGES, MAX_GRAPH_NODES};
use prim_core::{DuplicatePolicy, EdgeWeight, Engine, Graph, GraphStore, NodeId, Position};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum graph file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// A node entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    pub x: i64,
    pub y: i64,
}

/// An edge entry. The weight is signed so negative input can be reported
/// as `InvalidWeight` instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub a: u64,
    pub b: u64,
    pub weight: i64,
}

/// A whole graph file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
    #[serde(default)]
    pub start: Option<u64>,
    #[serde(default)]
    pub nodes: Vec<NodeConfig>,
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

impl GraphConfig {
    /// The built-in demo town.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            start: Some(DEFAULT_START.0),
            nodes: DEMO_TOWN_HOUSES
                .iter()
                .map(|&(x, y)| NodeConfig { x, y })
                .collect(),
            edges: DEMO_TOWN_ROADS
                .iter()
                .map(|&(a, b, w)| EdgeConfig {
                    a,
                    b,
                    weight: w as i64,
                })
                .collect(),
        }
    }

    /// Parse a graph from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, TrainerError> {
        toml::from_str(text).map_err(|e| TrainerError::Config(e.to_string()))
    }

    /// Load a graph file, or the demo town when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, TrainerError> {
        let Some(path) = path else {
            return Ok(Self::demo());
        };

        let validated = validate_file_path(path)?;
        let metadata = std::fs::metadata(&validated)?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(TrainerError::Config(format!(
                "File size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(&validated)?;
        tracing::info!("Loaded graph file {:?}", validated);
        Self::from_toml_str(&text)
    }

    /// Build the graph described by this file.
    ///
    /// Every edge is checked by the graph store; the first failure aborts.
    pub fn build_graph(&self) -> Result<Graph, TrainerError> {
        if self.nodes.len() > MAX_GRAPH_NODES {
            return Err(TrainerError::Config(format!(
                "Node count {} exceeds maximum allowed {}",
                self.nodes.len(),
                MAX_GRAPH_NODES
            )));
        }
        if self.edges.len() > MAX_GRAPH_EDGES {
            return Err(TrainerError::Config(format!(
                "Edge count {} exceeds maximum allowed {}",
                self.edges.len(),
                MAX_GRAPH_EDGES
            )));
        }

        let mut graph = Graph::with_policy(self.duplicate_policy);
        for node in &self.nodes {
            graph.add_node(Position::new(node.x, node.y));
        }
        for edge in &self.edges {
            let weight = EdgeWeight::from_signed(edge.weight)?;
            graph.add_edge(NodeId(edge.a), NodeId(edge.b), weight)?;
        }
        Ok(graph)
    }

    /// Build an engine with the configured start node selected.
    pub fn build_engine(&self) -> Result<Engine, TrainerError> {
        let mut engine = Engine::with_graph(self.build_graph()?);
        if let Some(start) = self.start {
            engine.select_start(NodeId(start))?;
        }
        Ok(engine)
    }

    /// The configured start node, or the default.
    #[must_use]
    pub fn start_node(&self) -> NodeId {
        self.start.map(NodeId).unwrap_or(DEFAULT_START)
    }
}

/// Canonicalize `path` and make sure it is a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, TrainerError> {
    let canonical = path.canonicalize().map_err(|e| {
        TrainerError::Config(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(TrainerError::Config(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}
