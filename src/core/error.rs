use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures reading or writing locale stores on disk.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse JSON: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Root of JSON file must be an object: {path}")]
    NotAnObject { path: PathBuf },
    #[error("Failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
