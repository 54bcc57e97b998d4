//! Error types for the extraction pipeline
//!
//! Apart from `Config`, none of these leave the crate as an `Err`: the
//! dispatcher and wrapper record them on the affected `ProcessedFile`.

use thiserror::Error;

/// Errors that can occur while processing a batch
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Path is missing, not a regular file, or unreadable
    #[error("{0}")]
    PathResolution(String),

    /// Extension is not in the supported-format registry
    #[error("unsupported format")]
    UnsupportedFormat,

    /// Extraction service failed outright on a file
    #[error("extraction failed: {0}")]
    ExtractionService(String),

    /// Blocking extraction task panicked or was cancelled
    #[error("extraction task failed: {0}")]
    Join(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<sieve_domain::ServiceError> for ExtractorError {
    fn from(e: sieve_domain::ServiceError) -> Self {
        ExtractorError::ExtractionService(e.message().to_string())
    }
}

impl From<tokio::task::JoinError> for ExtractorError {
    fn from(e: tokio::task::JoinError) -> Self {
        ExtractorError::Join(e.to_string())
    }
}

/// Why a raw element could not become an `Element`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    /// The raw item carries no type indicator at all
    #[error("missing type indicator")]
    MissingCategory,

    /// Text bytes are not valid in their declared encoding
    #[error("invalid {encoding} text: {reason}")]
    Encoding {
        /// Encoding the bytes were decoded as
        encoding: String,
        /// Decoder message
        reason: String,
    },

    /// Declared encoding is not one the normalizer can decode
    #[error("unsupported text encoding '{0}'")]
    UnsupportedEncoding(String),
}

impl NormalizationError {
    /// Short label used when summarizing skipped elements
    pub fn kind(&self) -> &'static str {
        match self {
            NormalizationError::MissingCategory => "missing type",
            NormalizationError::Encoding { .. } => "encoding",
            NormalizationError::UnsupportedEncoding(_) => "unsupported encoding",
        }
    }
}
