//! Authoritative in-memory patient-visit records with bounded undo/redo and
//! flat-file persistence.
//!
//! # Examples
//!
//! In-memory usage with [`core::store::RecordStore`] and
//! [`history::HistoryEngine`]:
//! ```
//! use chrono::NaiveDate;
//! use visitlog::{
//!     core::store::RecordStore,
//!     history::HistoryEngine,
//!     record::VisitDraft,
//! };
//!
//! let mut store = RecordStore::new();
//! let mut history = HistoryEngine::new();
//! let id = history.apply_add(&mut store, VisitDraft {
//!     patient_name: "Jane Doe".to_string(),
//!     visit_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
//!     visit_type: "Consultation".to_string(),
//!     description: "Regular checkup".to_string(),
//!     doctor_name: "Dr. Smith".to_string(),
//! });
//! assert_eq!(id, 1);
//!
//! history.undo(&mut store).expect("undo");
//! assert!(store.is_empty());
//! history.redo(&mut store).expect("redo");
//! assert_eq!(store.records()[0].patient_name, "Jane Doe");
//! ```
//!
//! Persistence against the delimited file:
//! ```no_run
//! use visitlog::{core::store::RecordStore, persist::file};
//!
//! let mut store = RecordStore::new();
//! let report = file::load_path(&mut store, "patient_visits.csv").expect("load");
//! println!("loaded {} records, skipped {}", report.loaded, report.skipped.len());
//! file::save_path(&store, "patient_visits.csv").expect("save");
//! ```
#![deny(missing_docs)]

/// Line codec for the delimited record format.
pub mod codec;
/// Reversible mutation command model.
pub mod command;
/// Core in-memory store.
pub mod core;
/// Bounded undo/redo engine.
pub mod history;
/// Flat-file persistence.
pub mod persist;
/// Visit record and draft types.
pub mod record;
/// Shared primitive types and enums.
pub mod types;
