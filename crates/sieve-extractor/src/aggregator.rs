//! Session aggregator - owns the live processing session

use sieve_domain::{ElementType, FileStatus, ProcessedFile, ProcessingSession, SessionStats};
use tracing::info;

/// Owns one user's `ProcessingSession`
///
/// Every aggregate is recomputed from the stored files on request, so it can
/// never drift from the element data.
#[derive(Debug, Clone, Default)]
pub struct SessionAggregator {
    session: ProcessingSession,
}

impl SessionAggregator {
    /// Start with an empty session
    pub fn new() -> Self {
        Self {
            session: ProcessingSession::new(),
        }
    }

    /// Read-only view of the current session
    pub fn current_session(&self) -> &ProcessingSession {
        &self.session
    }

    /// Append a completed file and return the stored entry
    pub fn append(&mut self, file: ProcessedFile) -> &ProcessedFile {
        self.session.push(file);
        &self.session.files[self.session.files.len() - 1]
    }

    /// Discard every file and reset the session start time
    pub fn clear(&mut self) {
        let dropped = self.session.files.len();
        self.session.reset();
        info!("Cleared session ({} files discarded), new session {}", dropped, self.session.id);
    }

    /// Whether no files have been processed
    pub fn is_empty(&self) -> bool {
        self.session.is_empty()
    }

    /// Aggregate statistics over the whole session
    pub fn stats(&self) -> SessionStats {
        self.session.stats()
    }

    /// Bounded preview of every file: the first `limit` elements, with text
    /// cut to `text_chars` characters
    pub fn preview(&self, limit: usize, text_chars: usize) -> Vec<FilePreview> {
        self.session
            .files
            .iter()
            .map(|file| FilePreview {
                filename: file.filename.clone(),
                file_type: file.file_type.clone(),
                file_size: file.file_size,
                status: file.status,
                error_detail: file.error_detail.clone(),
                element_count: file.element_count(),
                word_count: file.word_count(),
                elements: file
                    .elements
                    .iter()
                    .take(limit)
                    .map(|element| ElementPreview {
                        element_type: element.element_type,
                        text: truncate(&element.text, text_chars),
                    })
                    .collect(),
                remaining: file.element_count().saturating_sub(limit),
            })
            .collect()
    }
}

/// Preview of one processed file
#[derive(Debug, Clone, PartialEq)]
pub struct FilePreview {
    /// Display filename
    pub filename: String,
    /// Dotted extension
    pub file_type: String,
    /// Size in bytes
    pub file_size: u64,
    /// Processing status
    pub status: FileStatus,
    /// Failure detail, if any
    pub error_detail: Option<String>,
    /// Elements kept
    pub element_count: usize,
    /// Words across all kept elements
    pub word_count: usize,
    /// Leading elements
    pub elements: Vec<ElementPreview>,
    /// Elements not shown
    pub remaining: usize,
}

/// Preview of one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPreview {
    /// Element type tag
    pub element_type: ElementType,
    /// Possibly truncated text
    pub text: String,
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
