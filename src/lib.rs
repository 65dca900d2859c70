//! # Keiro - Workflow Rule-Graph Core
//!
//! **Keiro** is the graph core of an order-processing workflow builder: a
//! directed graph of typed steps (email triggers, product matching, pricing
//! adjustments, notifications, ...) with a declared connectivity policy, a
//! structural linter, and a flat save/load shape for persistence adapters.
//!
//! It deliberately owns nothing else. HTTP routes, database schemas, email
//! delivery and the drag-and-drop editor are collaborators that sit on top
//! of this crate's in-memory API and record shapes.
//!
//! ## Core Workflow
//!
//! 1. **Build or import a graph**: mutate a
//!    [`WorkflowGraph`](graph::WorkflowGraph) directly from editor gestures,
//!    or convert an editor export via the [`IntoGraph`](canvas::IntoGraph)
//!    trait (implemented for the bundled
//!    [`CanvasWorkflow`](canvas::CanvasWorkflow) JSON shape).
//! 2. **Let the graph gate connections**:
//!    [`add_edge`](graph::WorkflowGraph::add_edge)
//!    consults the node-kind adjacency table and returns the full set of
//!    permitted targets when it rejects, so the editor can explain itself.
//! 3. **Lint**: [`graph::lint::lint_graph`] reports cycles, orphans and
//!    branches that never reach an invoice or notification step. Warnings
//!    never block a save.
//! 4. **Persist**: flatten to a [`WorkflowSnapshot`](store::WorkflowSnapshot)
//!    and hand it to a [`WorkflowStore`](store::WorkflowStore) adapter. Saves
//!    replace the owner's single workflow atomically.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut graph = WorkflowGraph::new();
//!     let email = graph.add_node(NodeKind::Email, Position::new(0.0, 0.0), Config::new()).id;
//!     let product = graph.add_node(NodeKind::Product, Position::new(220.0, 0.0), Config::new()).id;
//!     let invoice = graph.add_node(NodeKind::Invoice, Position::new(440.0, 0.0), Config::new()).id;
//!
//!     graph.add_edge(email, product)?;
//!     graph.add_edge(product, invoice)?;
//!
//!     // Invoice is a terminal step; connecting out of it is rejected with
//!     // the (empty) list of kinds that would have been accepted.
//!     assert!(graph.add_edge(invoice, email).is_err());
//!
//!     for warning in lint_graph(&graph) {
//!         println!("warning: {warning}");
//!     }
//!
//!     // Persist through the in-memory reference adapter.
//!     let mut store = MemoryStore::new();
//!     let owner = OwnerId::from("acme-manufacturing");
//!     store.save(&owner, &Workflow::new(graph, true))?;
//!
//!     let loaded = store.load(&owner)?.ok_or("workflow missing after save")?;
//!     assert_eq!(loaded.graph.node_count(), 3);
//!     assert_eq!(loaded.graph.edge_count(), 2);
//!     Ok(())
//! }
//! ```

pub mod canvas;
pub mod error;
pub mod graph;
pub mod node;
pub mod prelude;
pub mod store;
