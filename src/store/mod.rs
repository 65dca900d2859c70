use crate::error::PersistenceError;
use crate::graph::{OwnerId, Workflow};

mod memory;
mod records;

pub use memory::*;
pub use records::*;

/// The persistence adapter seam.
///
/// A store holds at most one workflow per owner; `save` replaces the owner's
/// workflow wholesale. Implementations MUST make `save` atomic: either the
/// new record set is fully committed or the previously persisted workflow is
/// left exactly as it was. Partial writes (nodes inserted, edges lost) are a
/// contract violation, not a recoverable state.
///
/// Two clients saving the same owner's workflow concurrently is
/// last-writer-wins; adapters that implement compare-and-swap instead report
/// a lost race as [`PersistenceError::Conflict`].
pub trait WorkflowStore {
    /// Persists the workflow, replacing whatever was stored for this owner,
    /// and returns the persisted workflow id.
    fn save(&mut self, owner: &OwnerId, workflow: &Workflow) -> Result<WorkflowId, PersistenceError>;

    /// Loads the owner's workflow. `Ok(None)` when the owner has never saved.
    fn load(&self, owner: &OwnerId) -> Result<Option<Workflow>, PersistenceError>;

    /// Removes the owner's workflow. Deleting an absent workflow is not an
    /// error.
    fn delete(&mut self, owner: &OwnerId) -> Result<(), PersistenceError>;
}
