//! Prelude module for convenient imports
//!
//! Re-exports the types most embedders need: the graph store and its id
//! types, the node-kind catalog, the lint pass, the persistence seam and the
//! canvas import layer.

// Graph store and identity types
pub use crate::graph::{
    EdgeId, NodeId, OwnerId, Position, Workflow, WorkflowEdge, WorkflowGraph, WorkflowNode,
};

// Node catalog and configuration
pub use crate::node::{Config, NodeKind};

// Connectivity and structural checks
pub use crate::graph::connection;
pub use crate::graph::lint::{lint_graph, LintWarning};

// Persistence boundary
pub use crate::store::{MemoryStore, WorkflowId, WorkflowSnapshot, WorkflowStore};

// Canvas import
pub use crate::canvas::{CanvasWorkflow, IntoGraph};

// Error types
pub use crate::error::{ConnectionError, GraphError, ImportError, PersistenceError};
