//! Shared primitive IDs and visit-category names.

/// Monotonic visit-record identifier.
pub type VisitId = u64;

/// Canonical visit categories offered by interactive shells.
///
/// The category is stored as free text both in memory and on disk, so this
/// list is advisory rather than a closed set.
pub const VISIT_TYPES: [&str; 4] = [
    "Consultation",
    "Follow-up",
    "Emergency",
    "Routine Check-up",
];
