use super::NodeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an edge within one workflow. Same lifetime rules as
/// [`NodeId`]: unique within the graph, remapped on persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub(crate) u64);

impl EdgeId {
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub const fn from_u64(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed connection asserting "output of source feeds into target".
///
/// Invariant: at creation time `target.kind` was in
/// `source.kind.allowed_targets()`. Node kinds are immutable after creation,
/// so edges are never re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}
