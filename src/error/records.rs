//! Record source errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the record file.
#[derive(Error, Debug)]
pub enum RecordsError {
    /// The record file does not exist.
    #[error("Record file not found: {0}")]
    NotFound(PathBuf),

    /// The record file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("Failed to read record file {path}: {source}")]
    Read {
        /// The file being read
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },
}
