//! Trait definitions for external interactions
//!
//! These traits define the boundary between the pipeline and the per-format
//! parsers. Implementations live in other crates.

use crate::file_type::FileType;
use crate::raw::RawElement;
use std::fmt;
use std::path::Path;

/// An extraction service failed outright on a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    /// Create a service error with a description of the cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Description of the cause
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ServiceError {}

/// Trait for format-aware content extraction
///
/// Implemented by parser backends (plain text, PDF layout analysis, OCR, ...).
/// Calls are blocking; the pipeline runs them off the async executor.
pub trait ExtractionService: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Turn one file into an ordered sequence of raw items
    ///
    /// Returning `Err` marks the whole file as failed. Malformed individual
    /// items should be returned as-is and left for the normalizer to reject.
    fn partition(&self, path: &Path, file_type: FileType) -> Result<Vec<RawElement>, ServiceError>;
}
