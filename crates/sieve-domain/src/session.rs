//! Processing session - accumulated results for one interactive user

use crate::element::ElementType;
use crate::processed_file::{FileStatus, ProcessedFile};
use std::collections::BTreeMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Unique identifier for a session based on UUIDv7
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u128);

impl SessionId {
    /// Generate a new UUIDv7-based SessionId
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a SessionId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// The unit of user-visible state
///
/// Owned by exactly one caller; never shared between user sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSession {
    /// Identifier, regenerated on reset
    pub id: SessionId,

    /// Session start (seconds since Unix epoch)
    pub created_at: u64,

    /// Processed files, in submission order
    pub files: Vec<ProcessedFile>,
}

impl ProcessingSession {
    /// Start an empty session now
    pub fn new() -> Self {
        Self::started_at(now_secs())
    }

    /// Start an empty session with an explicit start time
    pub fn started_at(created_at: u64) -> Self {
        Self {
            id: SessionId::new(),
            created_at,
            files: Vec::new(),
        }
    }

    /// Append a completed file
    pub fn push(&mut self, file: ProcessedFile) {
        self.files.push(file);
    }

    /// Discard all files and restart the clock
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether no files have been processed
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Aggregate statistics, computed from `files` on every call
    pub fn stats(&self) -> SessionStats {
        SessionStats::from_files(&self.files)
    }
}

impl Default for ProcessingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate values derived from a set of processed files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Number of files
    pub total_files: usize,

    /// Number of normalized elements across all files
    pub total_elements: usize,

    /// Number of words across all files
    pub total_words: usize,

    /// Sum of file sizes in bytes
    pub total_bytes: u64,

    /// Files per status
    pub by_status: BTreeMap<FileStatus, usize>,

    /// Elements per type across all files
    pub by_element_type: BTreeMap<ElementType, usize>,
}

impl SessionStats {
    /// Compute statistics over `files`
    pub fn from_files(files: &[ProcessedFile]) -> Self {
        let mut stats = Self {
            total_files: files.len(),
            ..Self::default()
        };

        for file in files {
            stats.total_elements += file.element_count();
            stats.total_words += file.word_count();
            stats.total_bytes += file.file_size;
            *stats.by_status.entry(file.status).or_insert(0) += 1;
            for element in &file.elements {
                *stats.by_element_type.entry(element.element_type).or_insert(0) += 1;
            }
        }

        stats
    }

    /// Number of files with the given status
    pub fn count(&self, status: FileStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Files processed: {}", self.total_files),
            format!("  Success: {}", self.count(FileStatus::Success)),
            format!("  Partial success: {}", self.count(FileStatus::PartialSuccess)),
            format!("  Failed: {}", self.count(FileStatus::Failed)),
            format!("Total elements: {}", self.total_elements),
            format!("Total words: {}", self.total_words),
            format!("Total bytes: {}", self.total_bytes),
        ];

        if !self.by_element_type.is_empty() {
            lines.push("Elements by type:".to_string());
            for (element_type, count) in &self.by_element_type {
                lines.push(format!("  {}: {}", element_type, count));
            }
        }

        lines.join("\n")
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
