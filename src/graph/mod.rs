use crate::error::GraphError;
use crate::node::{Config, NodeKind};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod connection;
mod edge;
pub mod lint;
mod node;

pub use edge::*;
pub use node::*;

/// The account (manufacturer) that owns a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(pub String);

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A complete workflow: one account's node+edge graph plus its activation
/// flag. Each owner has at most one workflow; saving replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workflow {
    pub graph: WorkflowGraph,
    pub is_active: bool,
}

impl Workflow {
    pub fn new(graph: WorkflowGraph, is_active: bool) -> Self {
        Self { graph, is_active }
    }
}

/// The in-memory workflow graph the editor mutates.
///
/// An explicit, passed-around value: there is no ambient singleton, the UI
/// layer holds a reference to exactly one instance per open workflow. All
/// mutation goes through the methods below; edge creation is gated by
/// [`connection::check`], and node removal cascades so the edge list can
/// never reference a missing node.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    nodes: Vec<WorkflowNode>,
    edges: Vec<WorkflowEdge>,
    node_index: AHashMap<NodeId, usize>,
    next_node_id: u64,
    next_edge_id: u64,
}

impl PartialEq for WorkflowGraph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl WorkflowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node of the given kind and returns it. The id comes from a
    /// monotonic per-graph counter, so rapid successive adds can never
    /// collide.
    pub fn add_node(&mut self, kind: NodeKind, position: Position, config: Config) -> &WorkflowNode {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;

        let configured = !config.is_empty();
        let pos = self.nodes.len();
        self.node_index.insert(id, pos);
        self.nodes.push(WorkflowNode {
            id,
            kind,
            position,
            config,
            configured,
        });
        &self.nodes[pos]
    }

    /// Replaces a node's canvas position. Positions are unconstrained
    /// real-valued coordinates; no validity check applies.
    pub fn move_node(&mut self, id: NodeId, position: Position) -> Result<(), GraphError> {
        let node = self.node_mut(id)?;
        node.position = position;
        Ok(())
    }

    /// Replaces a node's configuration and marks it configured, as the
    /// editor's form does on submit.
    pub fn set_config(&mut self, id: NodeId, config: Config) -> Result<(), GraphError> {
        let node = self.node_mut(id)?;
        node.config = config;
        node.configured = true;
        Ok(())
    }

    /// Removes a node and every edge incident to it.
    ///
    /// The cascade is a hard invariant: after this returns, no edge in the
    /// graph references `id` as either endpoint.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), GraphError> {
        let pos = *self
            .node_index
            .get(&id)
            .ok_or(GraphError::NodeNotFound(id))?;
        self.nodes.remove(pos);
        self.edges.retain(|e| e.source != id && e.target != id);
        self.rebuild_index();
        Ok(())
    }

    /// Connects `source` to `target` if both exist and the connectivity
    /// table permits the pair. On any failure the edge list is untouched.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<WorkflowEdge, GraphError> {
        let source_kind = self.node(source).ok_or(GraphError::NodeNotFound(source))?.kind;
        let target_kind = self.node(target).ok_or(GraphError::NodeNotFound(target))?.kind;
        connection::check(source_kind, target_kind)?;

        let edge = WorkflowEdge {
            id: EdgeId(self.next_edge_id),
            source,
            target,
        };
        self.next_edge_id += 1;
        self.edges.push(edge);
        Ok(edge)
    }

    /// Removes an edge by id. Idempotent: removing an absent id is a no-op.
    pub fn remove_edge(&mut self, id: EdgeId) {
        self.edges.retain(|e| e.id != id);
    }

    /// Empties the graph unconditionally. Id counters are not reset, so ids
    /// of later nodes never collide with ids handed out before the clear.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.node_index.clear();
    }

    pub fn node(&self, id: NodeId) -> Option<&WorkflowNode> {
        self.node_index.get(&id).map(|&pos| &self.nodes[pos])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[WorkflowNode] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[WorkflowEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut WorkflowNode, GraphError> {
        let pos = *self
            .node_index
            .get(&id)
            .ok_or(GraphError::NodeNotFound(id))?;
        Ok(&mut self.nodes[pos])
    }

    fn rebuild_index(&mut self) {
        self.node_index.clear();
        for (pos, node) in self.nodes.iter().enumerate() {
            self.node_index.insert(node.id, pos);
        }
    }

    /// Rebuilds a graph from already-identified parts, e.g. rows loaded from
    /// storage. Ids must be unique; the id counters resume past the largest
    /// ids seen so later adds cannot collide.
    pub(crate) fn from_parts(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Self {
        let next_node_id = nodes.iter().map(|n| n.id.0 + 1).max().unwrap_or(0);
        let next_edge_id = edges.iter().map(|e| e.id.0 + 1).max().unwrap_or(0);
        let node_index = nodes.iter().enumerate().map(|(pos, n)| (n.id, pos)).collect();
        Self {
            nodes,
            edges,
            node_index,
            next_node_id,
            next_edge_id,
        }
    }
}
