//! Measurement records.
//!
//! A measurement file is written by the instrumentation run, one record per line:
//!
//! ```text
//! BEGIN launch,1000
//! END launch,2500
//! ```
//!
//! The first field is free-form text that markers are matched against. The second field is a
//! timestamp in microseconds. Any further fields are ignored.

use crate::RecordError;

/// Separator between the fields of a record.
pub const FIELD_SEPARATOR: char = ',';

/// Reads the value field (the second field) of a record.
///
/// ```
/// assert_eq!(profile_ranges::record::value_field("BEGIN,1000"), Ok(1000));
/// assert_eq!(profile_ranges::record::value_field("END, 2500 ,extra\r"), Ok(2500));
/// ```
pub fn value_field(line: &str) -> Result<i64, RecordError> {
    let field = line
        .split(FIELD_SEPARATOR)
        .nth(1)
        .ok_or(RecordError::MissingValue)?
        .trim();
    field
        .parse()
        .map_err(|_| RecordError::InvalidValue(field.to_owned()))
}

#[test]
fn test_value_field() {
    assert_eq!(value_field("BEGIN,1000"), Ok(1000));
    assert_eq!(value_field("BEGIN,1000\n"), Ok(1000));
    assert_eq!(value_field("BEGIN,-12,[description]"), Ok(-12));
}

#[test]
fn test_value_field_errors() {
    assert_eq!(value_field("BEGIN"), Err(RecordError::MissingValue));
    assert_eq!(
        value_field("BEGIN,soon"),
        Err(RecordError::InvalidValue("soon".to_owned()))
    );
    assert_eq!(
        value_field("BEGIN,"),
        Err(RecordError::InvalidValue(String::new()))
    );
}
