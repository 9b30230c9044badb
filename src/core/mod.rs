//! In-memory authoritative store.

/// Authoritative visit-record store and direct mutation primitives.
pub mod store;
