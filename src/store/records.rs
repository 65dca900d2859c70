use crate::error::PersistenceError;
use crate::graph::{
    EdgeId, NodeId, OwnerId, Position, Workflow, WorkflowEdge, WorkflowGraph, WorkflowNode,
};
use crate::node::NodeKind;
use ahash::{AHashMap, AHashSet};
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::{Read, Write};

/// Identifies a persisted workflow row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowId(pub u64);

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wf{}", self.0)
    }
}

/// A source of persisted row ids. Real stores mint ids on insert, so the
/// snapshot pass asks the adapter for them instead of inventing its own.
pub trait IdSource {
    fn next_id(&mut self) -> u64;
}

/// Monotonic id source used by [`MemoryStore`](super::MemoryStore) and tests.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// The single workflow row for an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    pub id: WorkflowId,
    pub owner: OwnerId,
    pub is_active: bool,
}

/// One persisted node row. `config` is the JSON text of the node's
/// configuration object, exactly as a config column would hold it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: u64,
    pub workflow_id: WorkflowId,
    pub kind: NodeKind,
    pub x: f64,
    pub y: f64,
    pub config: String,
    pub configured: bool,
}

/// One persisted edge row, referencing persisted node ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: u64,
    pub workflow_id: WorkflowId,
    pub source_node_id: u64,
    pub target_node_id: u64,
}

/// The flat record form of a workflow: what crosses the persistence
/// boundary. One workflow row, N node rows, M edge rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    pub workflow: WorkflowRecord,
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl WorkflowSnapshot {
    /// Flattens a workflow into records.
    ///
    /// Node rows are produced first so their persisted ids are known, then
    /// edge rows are translated from editor-local node ids to persisted ids
    /// through the remap built in that first pass.
    pub fn flatten(
        workflow_id: WorkflowId,
        owner: &OwnerId,
        workflow: &Workflow,
        ids: &mut dyn IdSource,
    ) -> Result<Self, PersistenceError> {
        let mut remap: AHashMap<NodeId, u64> = AHashMap::new();
        let mut nodes = Vec::with_capacity(workflow.graph.node_count());
        for node in workflow.graph.nodes() {
            let persisted_id = ids.next_id();
            remap.insert(node.id, persisted_id);
            let config = serde_json::to_string(&node.config)
                .map_err(|e| PersistenceError::Codec(e.to_string()))?;
            nodes.push(NodeRecord {
                id: persisted_id,
                workflow_id,
                kind: node.kind,
                x: node.position.x,
                y: node.position.y,
                config,
                configured: node.configured,
            });
        }

        let mut edges = Vec::with_capacity(workflow.graph.edge_count());
        for edge in workflow.graph.edges() {
            // Both endpoints exist by the graph's cascade invariant.
            let source = remap
                .get(&edge.source)
                .copied()
                .ok_or(PersistenceError::DanglingEdge {
                    edge_id: edge.id.as_u64(),
                    node_id: edge.source.as_u64(),
                })?;
            let target = remap
                .get(&edge.target)
                .copied()
                .ok_or(PersistenceError::DanglingEdge {
                    edge_id: edge.id.as_u64(),
                    node_id: edge.target.as_u64(),
                })?;
            edges.push(EdgeRecord {
                id: ids.next_id(),
                workflow_id,
                source_node_id: source,
                target_node_id: target,
            });
        }

        Ok(Self {
            workflow: WorkflowRecord {
                id: workflow_id,
                owner: owner.clone(),
                is_active: workflow.is_active,
            },
            nodes,
            edges,
        })
    }

    /// Rebuilds an in-memory workflow from the records.
    ///
    /// Post-load editor ids equal the persisted ids, which generally differ
    /// from the editor ids the graph had before it was saved; callers must
    /// not assume id stability across a save/load round trip. An edge row
    /// naming a missing node row is rejected as [`PersistenceError::DanglingEdge`].
    pub fn restore(&self) -> Result<Workflow, PersistenceError> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for record in &self.nodes {
            let config = serde_json::from_str(&record.config)
                .map_err(|e| PersistenceError::Codec(e.to_string()))?;
            nodes.push(WorkflowNode {
                id: NodeId::from_u64(record.id),
                kind: record.kind,
                position: Position::new(record.x, record.y),
                config,
                configured: record.configured,
            });
        }

        let known: AHashSet<u64> = self.nodes.iter().map(|n| n.id).collect();
        let mut edges = Vec::with_capacity(self.edges.len());
        for record in &self.edges {
            for endpoint in [record.source_node_id, record.target_node_id] {
                if !known.contains(&endpoint) {
                    return Err(PersistenceError::DanglingEdge {
                        edge_id: record.id,
                        node_id: endpoint,
                    });
                }
            }
            edges.push(WorkflowEdge {
                id: EdgeId::from_u64(record.id),
                source: NodeId::from_u64(record.source_node_id),
                target: NodeId::from_u64(record.target_node_id),
            });
        }

        Ok(Workflow::new(
            WorkflowGraph::from_parts(nodes, edges),
            self.workflow.is_active,
        ))
    }

    /// Encodes the snapshot into bincode bytes, for export or backup.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PersistenceError> {
        encode_to_vec(self, standard()).map_err(|e| PersistenceError::Codec(e.to_string()))
    }

    /// Decodes a snapshot from bincode bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PersistenceError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot)
            .map_err(|e| PersistenceError::Codec(e.to_string()))
    }

    /// Writes the snapshot to a file in the bincode format.
    pub fn save_file(&self, path: &str) -> Result<(), PersistenceError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path)
            .map_err(|e| PersistenceError::Backend(format!("could not create '{path}': {e}")))?;
        file.write_all(&bytes)
            .map_err(|e| PersistenceError::Backend(format!("could not write '{path}': {e}")))
    }

    /// Reads a snapshot previously written with [`save_file`](Self::save_file).
    pub fn from_file(path: &str) -> Result<Self, PersistenceError> {
        let mut file = fs::File::open(path)
            .map_err(|e| PersistenceError::Backend(format!("could not open '{path}': {e}")))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|e| PersistenceError::Backend(format!("could not read '{path}': {e}")))?;
        Self::from_bytes(&bytes)
    }
}
