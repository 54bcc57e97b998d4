//! Sieve Domain Layer
//!
//! Core data model for the document extraction pipeline. It depends on nothing
//! but `uuid` and defines the value types and trait seams that the extractor,
//! exporter, and CLI crates build on.
//!
//! ## Key Concepts
//!
//! - **Element**: One normalized unit of extracted content (title, paragraph, table, ...)
//! - **ProcessedFile**: The outcome of processing one input path, with its elements
//! - **ProcessingSession**: Ordered files accumulated for one interactive user
//! - **FileType**: The supported-format registry, keyed by file extension
//! - **ExtractionService**: The collaborator that turns a file into raw items
//!
//! ## Invariants
//!
//! - An element's type is always a valid tag; unknown indicators become `uncategorized`
//! - `ProcessedFile::element_count()` and `word_count()` are always derived from `elements`
//! - Session aggregates are computed on demand and never cached

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod element;
pub mod file_type;
pub mod processed_file;
pub mod raw;
pub mod session;
pub mod traits;

// Re-exports for convenience
pub use element::{Coordinates, Element, ElementType, MetadataValue};
pub use file_type::FileType;
pub use processed_file::{FileStatus, ProcessedFile};
pub use raw::{RawElement, RawText};
pub use session::{ProcessingSession, SessionId, SessionStats};
pub use traits::{ExtractionService, ServiceError};

/// Count whitespace-delimited tokens in `text`.
///
/// # Examples
///
/// ```
/// use sieve_domain::count_words;
///
/// assert_eq!(count_words("  hello   world\n"), 2);
/// assert_eq!(count_words(""), 0);
/// ```
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
