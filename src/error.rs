use crate::graph::NodeId;
use crate::node::NodeKind;
use thiserror::Error;

/// Errors returned by mutating operations on a [`WorkflowGraph`](crate::graph::WorkflowGraph).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node '{0}' does not exist in this workflow")]
    NodeNotFound(NodeId),

    #[error(transparent)]
    InvalidConnection(#[from] ConnectionError),
}

/// A rejected node-to-node connection, carrying the full set of target kinds
/// the source kind would have accepted so the editor can tell the user what
/// WOULD have worked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("A '{source_kind}' node cannot connect to a '{target_kind}' node (allowed targets: {})", format_allowed(.allowed))]
pub struct ConnectionError {
    pub source_kind: NodeKind,
    pub target_kind: NodeKind,
    pub allowed: &'static [NodeKind],
}

fn format_allowed(allowed: &[NodeKind]) -> String {
    if allowed.is_empty() {
        return "none, terminal node".to_string();
    }
    allowed
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur at the persistence boundary (save/load/delete).
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Edge record '{edge_id}' references node '{node_id}', which has no node record")]
    DanglingEdge { edge_id: u64, node_id: u64 },

    #[error("Workflow for owner '{owner}' was modified concurrently")]
    Conflict { owner: String },

    #[error("Snapshot encoding/decoding failed: {0}")]
    Codec(String),

    #[error("Storage backend failed: {0}")]
    Backend(String),
}

/// Errors that can occur when converting an editor canvas format into a
/// [`WorkflowGraph`](crate::graph::WorkflowGraph).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Canvas node '{node_id}' has an unknown node type: '{type_name}'")]
    UnknownKind { node_id: String, type_name: String },

    #[error("Canvas edge '{edge_id}' references node '{node_id}', which is not in the canvas")]
    MissingEndpoint { edge_id: String, node_id: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}
