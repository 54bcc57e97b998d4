//! Per-file processing outcome

use crate::element::Element;
use crate::file_type::FileType;
use std::fmt;
use std::path::Path;

/// Outcome of processing one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileStatus {
    /// Every raw element normalized
    Success,
    /// Some raw elements normalized, some were skipped
    PartialSuccess,
    /// No element normalized, or the file never reached extraction
    Failed,
}

impl FileStatus {
    /// Get the status name as it appears in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Success => "success",
            FileStatus::PartialSuccess => "partial_success",
            FileStatus::Failed => "failed",
        }
    }

    /// Derive a status from normalization counts
    ///
    /// Any success at all keeps a file out of `Failed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_domain::FileStatus;
    ///
    /// assert_eq!(FileStatus::derive(10, 0), FileStatus::Success);
    /// assert_eq!(FileStatus::derive(4, 1), FileStatus::PartialSuccess);
    /// assert_eq!(FileStatus::derive(0, 3), FileStatus::Failed);
    /// assert_eq!(FileStatus::derive(0, 0), FileStatus::Failed);
    /// ```
    pub fn derive(normalized: usize, skipped: usize) -> Self {
        match (normalized, skipped) {
            (0, _) => FileStatus::Failed,
            (_, 0) => FileStatus::Success,
            _ => FileStatus::PartialSuccess,
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of processing one input path
///
/// `element_count()` and `word_count()` are always computed from `elements`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedFile {
    /// Path as submitted by the caller
    pub path: String,

    /// Final path component
    pub filename: String,

    /// Lower-cased extension with its leading dot (`.pdf`), empty if none
    pub file_type: String,

    /// Recognised format, if the extension is in the registry
    pub format: Option<FileType>,

    /// File size in bytes (0 when the file could not be read)
    pub file_size: u64,

    /// Normalized elements, in extraction order
    pub elements: Vec<Element>,

    /// How many raw items the extraction service returned
    pub raw_element_count: usize,

    /// Outcome of processing
    pub status: FileStatus,

    /// Why the file is not a full success; `None` exactly when status is `Success`
    pub error_detail: Option<String>,

    /// Bounded list of per-element skip reasons
    pub failure_notes: Vec<String>,
}

impl ProcessedFile {
    /// Create a failed entry for a path that never reached extraction
    pub fn failed(path: impl Into<String>, file_size: u64, detail: impl Into<String>) -> Self {
        let path = path.into();
        let (filename, file_type) = describe_path(&path);
        Self {
            format: FileType::from_extension(&file_type),
            path,
            filename,
            file_type,
            file_size,
            elements: Vec::new(),
            raw_element_count: 0,
            status: FileStatus::Failed,
            error_detail: Some(detail.into()),
            failure_notes: Vec::new(),
        }
    }

    /// Number of normalized elements
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Sum of whitespace-token counts across all element texts
    pub fn word_count(&self) -> usize {
        self.elements.iter().map(Element::word_count).sum()
    }

    /// Number of raw items that failed normalization
    pub fn skipped_count(&self) -> usize {
        self.raw_element_count.saturating_sub(self.elements.len())
    }
}

/// Split a submitted path into its display filename and dotted extension
pub fn describe_path(path: &str) -> (String, String) {
    let p = Path::new(path);
    let filename = p
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let file_type = p
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default();
    (filename, file_type)
}
