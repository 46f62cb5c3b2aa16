use std::io;
use std::path::PathBuf;
use thiserror::Error;

use facts::FactsError;

/// Failures that abort a run.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Facts(#[from] FactsError),
    #[error("Failed to write report '{}': {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
