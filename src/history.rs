//! Bounded undo/redo engine over [`Command`] replay.

use thiserror::Error;

use crate::{
    command::Command,
    core::store::RecordStore,
    record::VisitDraft,
    types::VisitId,
};

/// Maximum number of retained undo entries; oldest entries are evicted
/// beyond this.
pub const HISTORY_CAPACITY: usize = 10;

/// Errors surfaced by the history engine, all non-fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// Undo called with an empty undo stack.
    #[error("nothing to undo")]
    NothingToUndo,
    /// Redo called with an empty redo stack.
    #[error("nothing to redo")]
    NothingToRedo,
    /// Update/delete wrapper called for an id not in the store.
    #[error("no record with id {0}")]
    MissingRecord(VisitId),
}

/// Manager of the bounded undo stack and the redo stack.
///
/// The engine never owns the store; callers thread `&mut RecordStore`
/// through every operation so one driver can own both lifetimes explicitly.
/// Stacks are in-memory only and start empty on every process run.
#[derive(Debug)]
pub struct HistoryEngine {
    undo: Vec<Command>,
    redo: Vec<Command>,
    capacity: usize,
}

impl Default for HistoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryEngine {
    /// Creates an engine bounded at [`HISTORY_CAPACITY`] undo entries.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Creates an engine with a custom undo bound.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            capacity,
        }
    }

    /// Executes `command` against `store` and records it.
    ///
    /// The undo stack is trimmed to capacity, dropping the oldest entries,
    /// and the redo stack is cleared unconditionally: a new mutation
    /// invalidates all forward history. This is the only entry point for
    /// reversible mutation.
    pub fn apply(&mut self, store: &mut RecordStore, command: Command) {
        command.apply(store);
        self.push_undo(command);
        self.redo.clear();
    }

    /// Allocates an id, inserts `draft` as a new record, and records the
    /// add. Returns the allocated id.
    pub fn apply_add(&mut self, store: &mut RecordStore, draft: VisitDraft) -> VisitId {
        let id = store.allocate_id();
        self.apply(store, Command::Add {
            record: draft.into_record(id),
        });
        id
    }

    /// Replaces the record at `id` with `draft`, snapshotting the old value
    /// for reversal.
    pub fn apply_update(
        &mut self,
        store: &mut RecordStore,
        id: VisitId,
        draft: VisitDraft,
    ) -> Result<(), HistoryError> {
        let old = store
            .get(id)
            .cloned()
            .ok_or(HistoryError::MissingRecord(id))?;
        self.apply(store, Command::Update {
            old,
            new: draft.into_record(id),
        });
        Ok(())
    }

    /// Deletes the record at `id`, snapshotting it for reversal.
    pub fn apply_delete(
        &mut self,
        store: &mut RecordStore,
        id: VisitId,
    ) -> Result<(), HistoryError> {
        let record = store
            .get(id)
            .cloned()
            .ok_or(HistoryError::MissingRecord(id))?;
        self.apply(store, Command::Delete { record });
        Ok(())
    }

    /// Reverses the most recent command and moves it to the redo stack.
    pub fn undo(&mut self, store: &mut RecordStore) -> Result<(), HistoryError> {
        let command = self.undo.pop().ok_or(HistoryError::NothingToUndo)?;
        command.revert(store);
        self.redo.push(command);
        Ok(())
    }

    /// Re-executes the most recently undone command and moves it back to the
    /// undo stack, through the same capacity trim as [`apply`](Self::apply).
    pub fn redo(&mut self, store: &mut RecordStore) -> Result<(), HistoryError> {
        let command = self.redo.pop().ok_or(HistoryError::NothingToRedo)?;
        command.apply(store);
        self.push_undo(command);
        Ok(())
    }

    /// Number of commands currently undoable.
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of commands currently redoable.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Undo bound this engine was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn push_undo(&mut self, command: Command) {
        self.undo.push(command);
        if self.undo.len() > self.capacity {
            let excess = self.undo.len() - self.capacity;
            self.undo.drain(..excess);
        }
    }
}
