//! Import layer for the drag-and-drop editor's JSON export.
//!
//! The editor serializes its canvas as nodes with string ids, a type string,
//! a position, and a `data` payload holding the configuration form state.
//! [`CanvasWorkflow`] matches that shape field for field; [`IntoGraph`] is
//! the extension point for any other editor format.

use crate::error::ImportError;
use crate::graph::{NodeId, Position, WorkflowGraph};
use crate::node::{Config, NodeKind};
use ahash::AHashMap;
use serde::Deserialize;
use std::str::FromStr;

/// A trait for editor/canvas formats that can be converted into a
/// [`WorkflowGraph`].
///
/// Implement this on your own deserialization structs to feed a custom
/// canvas format into the graph core. The conversion must reject unknown
/// node kinds and illegal connections rather than dropping them.
pub trait IntoGraph {
    /// Consumes the object and converts it into a validated workflow graph.
    fn into_graph(self) -> Result<WorkflowGraph, ImportError>;
}

/// Complete canvas state as exported by the editor.
#[derive(Debug, Deserialize)]
pub struct CanvasWorkflow {
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<CanvasEdge>,
}

/// One canvas node. `type` carries the node kind as a string.
#[derive(Debug, Deserialize)]
pub struct CanvasNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: CanvasPosition,
    #[serde(default)]
    pub data: CanvasNodeData,
}

#[derive(Debug, Deserialize)]
pub struct CanvasPosition {
    pub x: f64,
    pub y: f64,
}

/// The configuration payload the editor attaches to a node. A freshly
/// dropped node has no payload yet, so both fields default.
#[derive(Debug, Default, Deserialize)]
pub struct CanvasNodeData {
    #[serde(default)]
    pub config: Config,
    #[serde(default)]
    pub configured: bool,
}

/// One canvas edge, referencing canvas node ids.
#[derive(Debug, Deserialize)]
pub struct CanvasEdge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl IntoGraph for CanvasWorkflow {
    fn into_graph(self) -> Result<WorkflowGraph, ImportError> {
        let mut graph = WorkflowGraph::new();
        let mut remap: AHashMap<String, NodeId> = AHashMap::new();

        for node in self.nodes {
            let kind = NodeKind::from_str(&node.kind).map_err(|()| ImportError::UnknownKind {
                node_id: node.id.clone(),
                type_name: node.kind.clone(),
            })?;
            let position = Position::new(node.position.x, node.position.y);
            let id = graph.add_node(kind, position, node.data.config).id;
            // The canvas flag is authoritative, not the config-presence
            // heuristic add_node applies.
            if let Ok(stored) = graph.node_mut(id) {
                stored.configured = node.data.configured;
            }
            remap.insert(node.id, id);
        }

        for edge in self.edges {
            let source = *remap
                .get(&edge.source)
                .ok_or_else(|| ImportError::MissingEndpoint {
                    edge_id: edge.id.clone(),
                    node_id: edge.source.clone(),
                })?;
            let target = *remap
                .get(&edge.target)
                .ok_or_else(|| ImportError::MissingEndpoint {
                    edge_id: edge.id.clone(),
                    node_id: edge.target.clone(),
                })?;
            graph.add_edge(source, target).map_err(ImportError::Graph)?;
        }

        Ok(graph)
    }
}
