//! Error types for the export formatter

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an export
///
/// An export either writes every requested file or none of them.
#[derive(Debug, Error)]
pub enum ExportError {
    /// No files have been processed in this session
    #[error("nothing to export: no files have been processed")]
    EmptySession,

    /// The export directory or a file in it could not be written
    #[error("cannot write {path}: {source}")]
    Unwritable {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failed
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV serialization failed
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// Unknown export format name
    #[error("unknown export format '{0}' (expected json, csv or text)")]
    UnknownFormat(String),
}

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
