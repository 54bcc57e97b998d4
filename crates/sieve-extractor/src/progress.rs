//! Progress reporting for batch processing

use sieve_domain::{FileStatus, SessionStats};
use tracing::info;

/// Coarse-grained progress event
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// A `process` batch is starting
    BatchStarted {
        /// Number of paths in the batch
        total_files: usize,
    },

    /// A file passed validation and is being extracted
    FileStarted {
        /// 1-based position in the batch
        index: usize,
        /// Number of paths in the batch
        total: usize,
        /// Display filename
        filename: String,
        /// Whether the format goes through OCR (and may be slow)
        ocr: bool,
    },

    /// Extraction service returned its raw items for a file
    ElementsFound {
        /// Display filename
        filename: String,
        /// Number of raw items
        total: usize,
    },

    /// Another `progress_interval` raw elements were normalized or skipped
    ElementsProcessed {
        /// Display filename
        filename: String,
        /// Raw elements handled so far
        processed: usize,
        /// Raw elements in the file
        total: usize,
    },

    /// A file finished, successfully or not
    FileCompleted {
        /// 1-based position in the batch
        index: usize,
        /// Number of paths in the batch
        total: usize,
        /// Display filename
        filename: String,
        /// Final status
        status: FileStatus,
        /// Elements kept
        element_count: usize,
        /// Words across kept elements
        word_count: usize,
        /// Raw elements skipped
        skipped: usize,
        /// Failure detail, when not a full success
        error_detail: Option<String>,
    },

    /// The batch finished
    BatchCompleted {
        /// Statistics over this batch only
        stats: SessionStats,
    },
}

/// Receiver of progress events (usually the command router)
pub trait ProgressSink {
    /// Handle one event
    fn emit(&mut self, event: ProgressEvent);
}

/// Collects events in memory
impl ProgressSink for Vec<ProgressEvent> {
    fn emit(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn emit(&mut self, _event: ProgressEvent) {}
}

/// Writes every event to the `tracing` log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ProgressSink for LogSink {
    fn emit(&mut self, event: ProgressEvent) {
        info!(?event, "progress");
    }
}

/// Throttles element-level progress and forwards events to a sink
pub struct ProgressReporter<'a> {
    sink: &'a mut dyn ProgressSink,
    interval: usize,
}

impl<'a> ProgressReporter<'a> {
    /// Create a reporter that emits element progress every `interval` elements
    pub fn new(sink: &'a mut dyn ProgressSink, interval: usize) -> Self {
        Self {
            sink,
            interval: interval.max(1),
        }
    }

    /// Forward an event unconditionally
    pub fn emit(&mut self, event: ProgressEvent) {
        self.sink.emit(event);
    }

    /// Report that `processed` of `total` raw elements are done
    ///
    /// Only every `interval`-th element produces an event.
    pub fn element_done(&mut self, filename: &str, processed: usize, total: usize) {
        if processed > 0 && processed % self.interval == 0 {
            self.sink.emit(ProgressEvent::ElementsProcessed {
                filename: filename.to_string(),
                processed,
                total,
            });
        }
    }
}
