//! Flat-file persistence for the record store.

/// Delimited-file load and save over the line codec.
pub mod file;

use thiserror::Error;

use crate::codec::FormatError;

/// File-system failure during load or save. The in-memory collection is
/// unaffected either way.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Underlying read or write failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// One input line the loader skipped as malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line_no: usize,
    /// Why the line failed to decode.
    pub error: FormatError,
}

/// Outcome of a load: malformed lines are non-fatal parse warnings returned
/// as data for the caller to report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records decoded and inserted.
    pub loaded: usize,
    /// Lines skipped with their decode errors, in input order.
    pub skipped: Vec<SkippedLine>,
}
