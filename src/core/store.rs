use chrono::NaiveDate;
use hashbrown::HashMap;

use crate::{record::VisitRecord, types::VisitId};

/// Owner of the live record collection and id allocation.
///
/// The direct mutation primitives here are not reversible themselves;
/// reversibility is [`crate::history::HistoryEngine`]'s job, which must be
/// the only path interactive shells use for mutation.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<VisitRecord>,
    pos: HashMap<VisitId, usize>,
    next_id: VisitId,
}

impl RecordStore {
    /// Creates an empty store with id allocation starting at 1.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Read-only view of the collection in insertion order.
    pub fn records(&self) -> &[VisitRecord] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: VisitId) -> Option<&VisitRecord> {
        self.pos.get(&id).map(|&idx| &self.records[idx])
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the next free id and advances the counter.
    pub fn allocate_id(&mut self) -> VisitId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends `record` to the collection.
    ///
    /// Keeps the id counter ahead of every id ever inserted, which covers
    /// both fresh allocation and reload of pre-existing ids from disk. No
    /// duplicate-id validation; callers must only insert allocated or
    /// snapshot ids.
    pub fn insert_direct(&mut self, record: VisitRecord) {
        self.next_id = self.next_id.max(record.id.saturating_add(1));
        self.pos.insert(record.id, self.records.len());
        self.records.push(record);
    }

    /// Replaces the record sharing `updated`'s id, in place by position.
    ///
    /// Silent no-op when the id is absent: replaying an update against an
    /// already-deleted record does nothing. Callers wanting an existence
    /// check must [`get`](Self::get) first.
    pub fn replace_direct(&mut self, updated: VisitRecord) {
        if let Some(&idx) = self.pos.get(&updated.id) {
            self.records[idx] = updated;
        }
    }

    /// Removes every record matching `id` (at most one under the uniqueness
    /// invariant). Silent no-op when the id is absent.
    pub fn delete_direct(&mut self, id: VisitId) {
        let before = self.records.len();
        self.records.retain(|rec| rec.id != id);
        if self.records.len() != before {
            self.rebuild_pos();
        }
    }

    /// Records whose patient name contains `needle`, case-insensitive.
    pub fn find_by_patient(&self, needle: &str) -> Vec<&VisitRecord> {
        let needle = needle.to_lowercase();
        self.records
            .iter()
            .filter(|rec| rec.patient_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Records whose doctor name contains `needle`, case-insensitive.
    pub fn find_by_doctor(&self, needle: &str) -> Vec<&VisitRecord> {
        let needle = needle.to_lowercase();
        self.records
            .iter()
            .filter(|rec| rec.doctor_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Records whose category equals `visit_type`, case-insensitive.
    pub fn find_by_visit_type(&self, visit_type: &str) -> Vec<&VisitRecord> {
        self.records
            .iter()
            .filter(|rec| rec.visit_type.eq_ignore_ascii_case(visit_type))
            .collect()
    }

    /// Records whose visit date is exactly `date`.
    pub fn find_on_date(&self, date: NaiveDate) -> Vec<&VisitRecord> {
        self.records
            .iter()
            .filter(|rec| rec.visit_date == date)
            .collect()
    }

    fn rebuild_pos(&mut self) {
        self.pos.clear();
        for (idx, rec) in self.records.iter().enumerate() {
            self.pos.insert(rec.id, idx);
        }
    }
}
