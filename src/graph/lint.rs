//! Structural lint over a workflow graph.
//!
//! The connectivity validator only gates one-hop connections, so a user can
//! still build cycles, orphan nodes, or branches that never reach a terminal
//! step. Whether such graphs are intentional (retry loops?) is an open
//! product question, so these are surfaced as warnings and never block a
//! save.

use super::{NodeId, WorkflowGraph};
use ahash::AHashMap;
use itertools::Itertools;
use log::debug;
use std::collections::HashSet;
use std::fmt;

/// A non-blocking structural finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// These nodes sit on at least one directed cycle.
    CycleDetected { node_ids: Vec<NodeId> },
    /// The node has no incident edges at all.
    OrphanNode { node_id: NodeId },
    /// No terminal step (invoice, notification) is reachable from this
    /// entry node, so orders entering here never produce an output.
    NoTerminalReachable { node_id: NodeId },
    /// The node was never configured through its form.
    Unconfigured { node_id: NodeId },
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintWarning::CycleDetected { node_ids } => {
                let ids = node_ids.iter().map(|id| id.to_string()).join(", ");
                write!(f, "cycle detected through nodes: {ids}")
            }
            LintWarning::OrphanNode { node_id } => {
                write!(f, "node '{node_id}' is not connected to anything")
            }
            LintWarning::NoTerminalReachable { node_id } => {
                write!(
                    f,
                    "no invoice or notification step is reachable from entry node '{node_id}'"
                )
            }
            LintWarning::Unconfigured { node_id } => {
                write!(f, "node '{node_id}' has not been configured")
            }
        }
    }
}

/// Inspects the graph and reports structural warnings, in a deterministic
/// order (by node id within each category).
pub fn lint_graph(graph: &WorkflowGraph) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    let successors = successor_map(graph);

    let cyclic: Vec<NodeId> = graph
        .nodes()
        .iter()
        .map(|n| n.id)
        .filter(|&id| reaches(&successors, id, id))
        .sorted()
        .collect();
    if !cyclic.is_empty() {
        warnings.push(LintWarning::CycleDetected { node_ids: cyclic });
    }

    let mut incident: HashSet<NodeId> = HashSet::new();
    for edge in graph.edges() {
        incident.insert(edge.source);
        incident.insert(edge.target);
    }
    if graph.node_count() > 1 {
        for node in graph.nodes() {
            if !incident.contains(&node.id) {
                warnings.push(LintWarning::OrphanNode { node_id: node.id });
            }
        }
    }

    let mut has_incoming: HashSet<NodeId> = HashSet::new();
    for edge in graph.edges() {
        has_incoming.insert(edge.target);
    }
    for node in graph.nodes() {
        let is_entry = !has_incoming.contains(&node.id) && incident.contains(&node.id);
        if is_entry && !reaches_terminal(graph, &successors, node.id) {
            warnings.push(LintWarning::NoTerminalReachable { node_id: node.id });
        }
    }

    for node in graph.nodes() {
        if !node.configured {
            warnings.push(LintWarning::Unconfigured { node_id: node.id });
        }
    }

    debug!(
        "lint: {} nodes, {} edges, {} warnings",
        graph.node_count(),
        graph.edge_count(),
        warnings.len()
    );
    warnings
}

fn successor_map(graph: &WorkflowGraph) -> AHashMap<NodeId, Vec<NodeId>> {
    let mut successors: AHashMap<NodeId, Vec<NodeId>> = AHashMap::new();
    for edge in graph.edges() {
        successors.entry(edge.source).or_default().push(edge.target);
    }
    successors
}

/// True when `goal` is reachable from `start` along one or more edges.
fn reaches(successors: &AHashMap<NodeId, Vec<NodeId>>, start: NodeId, goal: NodeId) -> bool {
    let mut seen = HashSet::new();
    let mut stack: Vec<NodeId> = successors.get(&start).cloned().unwrap_or_default();
    while let Some(id) = stack.pop() {
        if id == goal {
            return true;
        }
        if seen.insert(id) {
            if let Some(next) = successors.get(&id) {
                stack.extend(next.iter().copied());
            }
        }
    }
    false
}

/// True when some node of a terminal kind is reachable from `start`
/// (including `start` itself).
fn reaches_terminal(
    graph: &WorkflowGraph,
    successors: &AHashMap<NodeId, Vec<NodeId>>,
    start: NodeId,
) -> bool {
    let mut seen = HashSet::new();
    let mut stack = vec![start];
    while let Some(id) = stack.pop() {
        if !seen.insert(id) {
            continue;
        }
        if graph.node(id).is_some_and(|n| n.kind.is_terminal()) {
            return true;
        }
        if let Some(next) = successors.get(&id) {
            stack.extend(next.iter().copied());
        }
    }
    false
}
