//! Error types for loading and saving relation directories.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Structural failures. Any of these aborts a run.
#[derive(Error, Debug)]
pub enum FactsError {
    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Facts error: relation '{relation}' line {line}: expected {expected} fields, found {found}")]
    ArityMismatch {
        relation: String,
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Facts error: relation '{relation}' line {line} field {column}: cannot decode `{text}`: {reason}")]
    UndecodableField {
        relation: String,
        line: usize,
        column: usize,
        text: String,
        reason: String,
    },
    #[error("Facts error: relation '{relation}' has arity {found}, but {expected} is required")]
    SchemaMismatch {
        relation: String,
        expected: usize,
        found: usize,
    },
}

impl FactsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
