//! Error types for the document store, persistence and configuration.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level editor error type.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("row {row} is out of range (document has {row_count} rows)")]
    RowOutOfRange { row: usize, row_count: usize },

    #[error("row {row} has no previous row to join with")]
    NoPreviousRow { row: usize },

    #[error("overlay does not match document shape at row {row}")]
    OverlayMismatch { row: usize },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, EditorError>;
