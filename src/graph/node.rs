use crate::node::{Config, NodeKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a node within one workflow.
///
/// Ids are minted by the owning [`WorkflowGraph`](super::WorkflowGraph) from
/// a monotonic counter, so they are collision-free within the graph but NOT
/// stable across a save/load round trip (the persistence layer remaps them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub const fn from_u64(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Canvas coordinates of a node. Semantically inert: position never affects
/// validity or connectivity, it only drives the editor's rendering.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A typed step in a workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub position: Position,
    /// Kind-specific settings, filled in by the editor's configuration form.
    pub config: Config,
    /// True once the user has completed the kind-specific form.
    pub configured: bool,
}
