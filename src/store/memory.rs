use super::{SequentialIds, WorkflowId, WorkflowSnapshot, WorkflowStore};
use crate::error::PersistenceError;
use crate::graph::{OwnerId, Workflow};
use ahash::AHashMap;
use log::{debug, warn};

/// In-memory [`WorkflowStore`] used by tests and embedders without a real
/// database.
///
/// Saves are committed as a single swap: the snapshot is built completely
/// before the owner's slot is touched, so a failed save leaves the previous
/// persisted workflow intact. Persisted row ids come from a store-wide
/// monotonic counter, like a database sequence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    workflows: AHashMap<OwnerId, WorkflowSnapshot>,
    ids: SequentialIds,
    next_workflow_id: u64,
    fail_next_save: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `save` call fail with a backend error before any
    /// state is touched. Used to verify the atomicity contract.
    pub fn inject_save_fault(&mut self, message: impl Into<String>) {
        self.fail_next_save = Some(message.into());
    }

    /// The raw snapshot currently persisted for an owner, if any.
    pub fn snapshot_for(&self, owner: &OwnerId) -> Option<&WorkflowSnapshot> {
        self.workflows.get(owner)
    }
}

impl WorkflowStore for MemoryStore {
    fn save(&mut self, owner: &OwnerId, workflow: &Workflow) -> Result<WorkflowId, PersistenceError> {
        if let Some(message) = self.fail_next_save.take() {
            return Err(PersistenceError::Backend(message));
        }

        let workflow_id = WorkflowId(self.next_workflow_id);
        let snapshot = WorkflowSnapshot::flatten(workflow_id, owner, workflow, &mut self.ids)?;
        // The owner's slot is only touched once the full snapshot exists; a
        // failed flatten burns ids (like a database sequence) but changes
        // nothing visible.
        self.next_workflow_id += 1;
        self.workflows.insert(owner.clone(), snapshot);
        debug!(
            "saved workflow {workflow_id} for owner '{owner}' ({} nodes, {} edges)",
            workflow.graph.node_count(),
            workflow.graph.edge_count()
        );
        Ok(workflow_id)
    }

    fn load(&self, owner: &OwnerId) -> Result<Option<Workflow>, PersistenceError> {
        match self.workflows.get(owner) {
            Some(snapshot) => snapshot.restore().map(Some),
            None => Ok(None),
        }
    }

    fn delete(&mut self, owner: &OwnerId) -> Result<(), PersistenceError> {
        if self.workflows.remove(owner).is_none() {
            warn!("delete for owner '{owner}' matched no workflow");
        }
        Ok(())
    }
}
