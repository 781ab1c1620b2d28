//! # Edge Draft
//!
//! The pending "add edge" interaction: two node selections, then a weight.
//!
//! A draft is pure bookkeeping. It never touches the graph or the session;
//! only `Engine::commit_edge` turns a ready draft into an edge.

use crate::NodeId;
use serde::Serialize;

/// Progress of a pending edge creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "draft", content = "endpoints", rename_all = "snake_case")]
pub enum EdgeDraft {
    /// Nothing selected.
    #[default]
    Empty,
    /// First endpoint chosen.
    OneEndpoint(NodeId),
    /// Both endpoints chosen; waiting for a weight.
    Ready(NodeId, NodeId),
}

impl EdgeDraft {
    /// Advance the draft with a node selection.
    ///
    /// Selecting the first endpoint again abandons the draft. Selecting a
    /// node on a ready draft starts over from that node.
    #[must_use]
    pub fn select(self, node: NodeId) -> Self {
        match self {
            Self::Empty | Self::Ready(..) => Self::OneEndpoint(node),
            Self::OneEndpoint(first) if first == node => Self::Empty,
            Self::OneEndpoint(first) => Self::Ready(first, node),
        }
    }

    /// Both endpoints, once the draft is ready.
    #[must_use]
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        match *self {
            Self::Ready(a, b) => Some((a, b)),
            _ => None,
        }
    }

    /// True while any selection is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}
