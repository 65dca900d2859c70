//! Tests for the canvas JSON import layer.
use keiro::prelude::*;

const CANVAS_JSON: &str = r#"{
    "nodes": [
        {
            "id": "node-1712000000-email",
            "type": "email",
            "position": { "x": 40.0, "y": 120.0 },
            "data": {
                "config": {
                    "email": "orders@acme.example",
                    "folder": "INBOX",
                    "subject_pattern": "purchase order"
                },
                "configured": true
            }
        },
        {
            "id": "node-1712000001-product",
            "type": "product",
            "position": { "x": 320.0, "y": 120.0 }
        },
        {
            "id": "node-1712000002-invoice",
            "type": "invoice",
            "position": { "x": 600.0, "y": 120.0 },
            "data": { "config": {}, "configured": false }
        }
    ],
    "edges": [
        { "id": "e1", "source": "node-1712000000-email", "target": "node-1712000001-product" },
        { "id": "e2", "source": "node-1712000001-product", "target": "node-1712000002-invoice" }
    ]
}"#;

#[test]
fn imports_a_canvas_export() {
    let canvas: CanvasWorkflow = serde_json::from_str(CANVAS_JSON).expect("canvas parses");
    let graph = canvas.into_graph().expect("import succeeds");

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    let email = graph
        .nodes()
        .iter()
        .find(|n| n.kind == NodeKind::Email)
        .expect("email node imported");
    assert!(email.configured);
    assert_eq!(email.position.x, 40.0);
    assert_eq!(
        email.config.get("folder").and_then(|v| v.as_str()),
        Some("INBOX")
    );

    // A node without a data payload imports unconfigured with empty config.
    let product = graph
        .nodes()
        .iter()
        .find(|n| n.kind == NodeKind::Product)
        .expect("product node imported");
    assert!(!product.configured);
    assert!(product.config.is_empty());
}

#[test]
fn unknown_kind_is_an_import_error() {
    let json = r#"{
        "nodes": [
            { "id": "a", "type": "emial", "position": { "x": 0.0, "y": 0.0 } }
        ],
        "edges": []
    }"#;
    let canvas: CanvasWorkflow = serde_json::from_str(json).expect("canvas parses");
    let err = canvas.into_graph().expect_err("typo'd kind is rejected");
    assert_eq!(
        err,
        ImportError::UnknownKind {
            node_id: "a".to_string(),
            type_name: "emial".to_string(),
        }
    );
}

#[test]
fn edge_to_unknown_canvas_node_is_an_import_error() {
    let json = r#"{
        "nodes": [
            { "id": "a", "type": "email", "position": { "x": 0.0, "y": 0.0 } }
        ],
        "edges": [
            { "id": "e1", "source": "a", "target": "ghost" }
        ]
    }"#;
    let canvas: CanvasWorkflow = serde_json::from_str(json).expect("canvas parses");
    let err = canvas.into_graph().expect_err("dangling edge is rejected");
    assert_eq!(
        err,
        ImportError::MissingEndpoint {
            edge_id: "e1".to_string(),
            node_id: "ghost".to_string(),
        }
    );
}

#[test]
fn illegal_canvas_connection_is_an_import_error() {
    let json = r#"{
        "nodes": [
            { "id": "a", "type": "invoice", "position": { "x": 0.0, "y": 0.0 } },
            { "id": "b", "type": "email", "position": { "x": 100.0, "y": 0.0 } }
        ],
        "edges": [
            { "id": "e1", "source": "a", "target": "b" }
        ]
    }"#;
    let canvas: CanvasWorkflow = serde_json::from_str(json).expect("canvas parses");
    let err = canvas.into_graph().expect_err("invoice cannot have outputs");
    assert!(matches!(
        err,
        ImportError::Graph(GraphError::InvalidConnection(_))
    ));
}
