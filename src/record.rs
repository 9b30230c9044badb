//! Visit-record domain types.

use chrono::NaiveDate;

use crate::types::VisitId;

/// Fully materialized, authoritative patient-visit record.
///
/// Records are value types: an update replaces the whole store entry with a
/// new `VisitRecord` rather than mutating fields in place, so history
/// commands can hold independent before/after snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    /// Stable record identifier, never reused while the store is alive.
    pub id: VisitId,
    /// Patient name as entered.
    pub patient_name: String,
    /// Calendar date of the visit, no time component.
    pub visit_date: NaiveDate,
    /// Visit category, free text (see [`crate::types::VISIT_TYPES`]).
    pub visit_type: String,
    /// Free-text description or notes.
    pub description: String,
    /// Attending physician, empty string when not specified.
    pub doctor_name: String,
}

/// Insert payload used to create a new [`VisitRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitDraft {
    /// Patient name as entered.
    pub patient_name: String,
    /// Calendar date of the visit.
    pub visit_date: NaiveDate,
    /// Visit category, free text.
    pub visit_type: String,
    /// Free-text description or notes.
    pub description: String,
    /// Attending physician, empty string when not specified.
    pub doctor_name: String,
}

impl VisitDraft {
    /// Materializes the draft into a record under `id`.
    pub fn into_record(self, id: VisitId) -> VisitRecord {
        VisitRecord {
            id,
            patient_name: self.patient_name,
            visit_date: self.visit_date,
            visit_type: self.visit_type,
            description: self.description,
            doctor_name: self.doctor_name,
        }
    }
}
