//! Line codec for the delimited visit-record format.
//!
//! One record encodes to one logical line of 6 comma-separated fields in the
//! order {id, patient, date, type, description, doctor}. Text fields that
//! contain a comma, a double quote, or a newline are wrapped in double quotes
//! with inner quotes doubled, so `decode_line(&encode_line(r)) == r` holds
//! for arbitrary field contents.

use chrono::NaiveDate;
use thiserror::Error;

use crate::{record::VisitRecord, types::VisitId};

/// Number of fields per encoded record.
pub const FIELD_COUNT: usize = 6;

/// Date rendering used on disk, locale-independent.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Malformed-line error raised by [`decode_line`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Fewer than [`FIELD_COUNT`] fields after splitting.
    #[error("expected {FIELD_COUNT} fields, found {found}")]
    FieldCount {
        /// Number of fields the line actually split into.
        found: usize,
    },
    /// The id field is not a decimal integer.
    #[error("invalid record id: {0:?}")]
    InvalidId(String),
    /// The date field is not in `%Y-%m-%d` form.
    #[error("invalid visit date: {0:?}")]
    InvalidDate(String),
}

/// Encodes one record as a single logical line, without a trailing newline.
pub fn encode_line(record: &VisitRecord) -> String {
    format!(
        "{},{},{},{},{},{}",
        record.id,
        escape_field(&record.patient_name),
        record.visit_date.format(DATE_FORMAT),
        escape_field(&record.visit_type),
        escape_field(&record.description),
        escape_field(&record.doctor_name),
    )
}

/// Decodes one logical line back into a record.
///
/// Fields past the sixth are ignored. Fails when fewer than six fields are
/// present, or when the id or date field does not parse.
pub fn decode_line(line: &str) -> Result<VisitRecord, FormatError> {
    let mut fields = split_fields(line);
    if fields.len() < FIELD_COUNT {
        return Err(FormatError::FieldCount {
            found: fields.len(),
        });
    }

    let id: VisitId = fields[0]
        .parse()
        .map_err(|_| FormatError::InvalidId(fields[0].clone()))?;
    let visit_date = NaiveDate::parse_from_str(&fields[2], DATE_FORMAT)
        .map_err(|_| FormatError::InvalidDate(fields[2].clone()))?;

    Ok(VisitRecord {
        id,
        patient_name: std::mem::take(&mut fields[1]),
        visit_date,
        visit_type: std::mem::take(&mut fields[3]),
        description: std::mem::take(&mut fields[4]),
        doctor_name: std::mem::take(&mut fields[5]),
    })
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Quote-aware comma split. A quote toggles quoted state, a doubled quote
/// inside a quoted field yields a literal quote, and commas inside quotes are
/// not separators.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}
