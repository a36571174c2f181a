use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("failed to read range definitions from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: expected `name:startMarker:endMarker`, found {fields} field(s) in {text:?}")]
    Malformed {
        line: usize,
        fields: usize,
        text: String,
    },
    #[error("line {line}: range name is empty")]
    EmptyName { line: usize },
    #[error("line {line}: range marker is empty")]
    EmptyMarker { line: usize },
}

/// Why the value of a measurement record could not be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("record has no value field")]
    MissingValue,
    #[error("value field {0:?} is not an integer")]
    InvalidValue(String),
}
