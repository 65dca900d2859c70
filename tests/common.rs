//! Common test utilities for building workflow graphs and configs.
use keiro::node::{self, EmailConfig};
use keiro::prelude::*;

/// Adds an unconfigured node of the given kind at the origin.
#[allow(dead_code)]
pub fn add(graph: &mut WorkflowGraph, kind: NodeKind) -> NodeId {
    graph.add_node(kind, Position::default(), Config::new()).id
}

/// A filled-in email trigger configuration, as the editor form produces it.
#[allow(dead_code)]
pub fn email_config() -> Config {
    node::to_config(&EmailConfig {
        email: "orders@acme.example".to_string(),
        folder: "INBOX".to_string(),
        subject_pattern: "(?i)purchase order".to_string(),
    })
    .expect("email config serializes")
}

/// A minimal non-empty config map for kinds whose exact shape is irrelevant
/// to the test.
#[allow(dead_code)]
pub fn any_config() -> Config {
    let mut config = Config::new();
    config.insert("note".to_string(), serde_json::Value::from("set"));
    config
}

/// Builds the straight-line pipeline email -> product -> invoice and returns
/// the graph plus the three node ids.
#[allow(dead_code)]
pub fn linear_pipeline() -> (WorkflowGraph, NodeId, NodeId, NodeId) {
    let mut graph = WorkflowGraph::new();
    let email = graph
        .add_node(NodeKind::Email, Position::new(0.0, 0.0), email_config())
        .id;
    let product = add(&mut graph, NodeKind::Product);
    let invoice = add(&mut graph, NodeKind::Invoice);
    graph.add_edge(email, product).expect("email -> product is legal");
    graph
        .add_edge(product, invoice)
        .expect("product -> invoice is legal");
    (graph, email, product, invoice)
}
