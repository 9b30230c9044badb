//! Reversible mutation command model.

use crate::{core::store::RecordStore, record::VisitRecord, types::VisitId};

/// A reified mutation holding enough state to both apply and reverse itself.
///
/// Commands own deep copies of every record they reference, never aliases
/// into the live store, so later edits to live records cannot corrupt
/// history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a new record.
    Add {
        /// Record to insert; its id is already allocated.
        record: VisitRecord,
    },
    /// Replace a record, keeping both sides of the swap.
    Update {
        /// Snapshot of the record before the update.
        old: VisitRecord,
        /// Replacement record, same id as `old`.
        new: VisitRecord,
    },
    /// Delete a record, keeping a snapshot for reversal.
    Delete {
        /// Snapshot of the deleted record.
        record: VisitRecord,
    },
}

impl Command {
    /// Executes the forward action against `store`.
    pub fn apply(&self, store: &mut RecordStore) {
        match self {
            Command::Add { record } => store.insert_direct(record.clone()),
            Command::Update { new, .. } => store.replace_direct(new.clone()),
            Command::Delete { record } => store.delete_direct(record.id),
        }
    }

    /// Executes the reverse action against `store`.
    ///
    /// Reversing a delete re-appends the snapshot, so the record's position
    /// in the collection may differ from before the delete. Collection order
    /// carries no meaning.
    pub fn revert(&self, store: &mut RecordStore) {
        match self {
            Command::Add { record } => store.delete_direct(record.id),
            Command::Update { old, .. } => store.replace_direct(old.clone()),
            Command::Delete { record } => store.insert_direct(record.clone()),
        }
    }

    /// Id of the record this command touches.
    pub fn target_id(&self) -> VisitId {
        match self {
            Command::Add { record } | Command::Delete { record } => record.id,
            Command::Update { new, .. } => new.id,
        }
    }
}
