//! Load and save of the one-record-per-line delimited file.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::{codec, core::store::RecordStore};

use super::{LoadReport, PersistResult, SkippedLine};

/// Loads records from `reader` into `store`, additively.
///
/// Blank lines are ignored. A line that fails to decode is skipped and
/// recorded in the report rather than aborting the load; a read failure
/// aborts with the records decoded so far already inserted. Loading bypasses
/// history: a reload is not undoable.
pub fn load_from(store: &mut RecordStore, reader: impl BufRead) -> PersistResult<LoadReport> {
    let mut report = LoadReport::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match codec::decode_line(&line) {
            Ok(record) => {
                store.insert_direct(record);
                report.loaded += 1;
            }
            Err(error) => report.skipped.push(SkippedLine {
                line_no: idx + 1,
                error,
            }),
        }
    }
    Ok(report)
}

/// Writes every record in `store`, one encoded line each, in collection
/// order.
pub fn save_to(store: &RecordStore, mut writer: impl Write) -> PersistResult<()> {
    for record in store.records() {
        writeln!(writer, "{}", codec::encode_line(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Opens `path` and loads it via [`load_from`].
pub fn load_path(store: &mut RecordStore, path: impl AsRef<Path>) -> PersistResult<LoadReport> {
    let file = File::open(path)?;
    load_from(store, BufReader::new(file))
}

/// Creates or truncates `path` and saves via [`save_to`].
pub fn save_path(store: &RecordStore, path: impl AsRef<Path>) -> PersistResult<()> {
    let file = File::create(path)?;
    save_to(store, BufWriter::new(file))
}
