//! File dispatcher
//!
//! Validates each submitted path and hands it to the extractor, strictly in
//! input order. A path that fails validation becomes a failed entry and the
//! batch moves on.

use crate::aggregator::SessionAggregator;
use crate::error::ExtractorError;
use crate::extractor::{Extractor, ResolvedFile};
use crate::progress::{ProgressEvent, ProgressReporter, ProgressSink};
use sieve_domain::processed_file::describe_path;
use sieve_domain::{FileType, ProcessedFile, SessionStats};
use std::io::ErrorKind;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs `process` batches against one session
#[derive(Debug, Clone)]
pub struct Dispatcher {
    extractor: Extractor,
}

impl Dispatcher {
    /// Create a new Dispatcher
    pub fn new(extractor: Extractor) -> Self {
        Self { extractor }
    }

    /// The wrapped extractor
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Process `paths` in order, appending each outcome to `session` as soon
    /// as it completes
    ///
    /// Returns one `ProcessedFile` per path, in input order.
    pub async fn dispatch(
        &self,
        paths: &[String],
        session: &mut SessionAggregator,
        sink: &mut dyn ProgressSink,
    ) -> Vec<ProcessedFile> {
        let start = Instant::now();
        let total = paths.len();
        let mut progress = ProgressReporter::new(sink, self.extractor.config().progress_interval);
        let mut batch = Vec::with_capacity(total);

        info!("Processing batch of {} files", total);
        progress.emit(ProgressEvent::BatchStarted { total_files: total });

        for (position, path) in paths.iter().enumerate() {
            let index = position + 1;

            let processed = match resolve(path).await {
                Ok(resolved) => {
                    let (filename, _) = describe_path(path);
                    progress.emit(ProgressEvent::FileStarted {
                        index,
                        total,
                        filename,
                        ocr: resolved.file_type.is_image(),
                    });
                    self.extractor.extract(&resolved, &mut progress).await
                }
                Err((e, file_size)) => {
                    warn!("Rejected '{}': {}", path, e);
                    ProcessedFile::failed(path.as_str(), file_size, e.to_string())
                }
            };

            progress.emit(ProgressEvent::FileCompleted {
                index,
                total,
                filename: processed.filename.clone(),
                status: processed.status,
                element_count: processed.element_count(),
                word_count: processed.word_count(),
                skipped: processed.skipped_count(),
                error_detail: processed.error_detail.clone(),
            });

            batch.push(session.append(processed).clone());
        }

        let stats = SessionStats::from_files(&batch);
        info!(
            "Batch complete in {}ms: {}",
            start.elapsed().as_millis(),
            stats.summary()
        );
        progress.emit(ProgressEvent::BatchCompleted { stats });

        batch
    }
}

/// Check a path in order: supported extension, exists, regular file, readable
///
/// On failure, also returns the size when it was already known.
async fn resolve(path: &str) -> Result<ResolvedFile, (ExtractorError, u64)> {
    let file_type =
        FileType::from_path(path).ok_or((ExtractorError::UnsupportedFormat, 0))?;

    let metadata = tokio::fs::metadata(path).await.map_err(|e| {
        let detail = match e.kind() {
            ErrorKind::NotFound => "file not found".to_string(),
            _ => format!("file not readable: {}", e),
        };
        (ExtractorError::PathResolution(detail), 0)
    })?;

    if !metadata.is_file() {
        return Err((
            ExtractorError::PathResolution("not a regular file".to_string()),
            0,
        ));
    }

    let file_size = metadata.len();
    tokio::fs::File::open(path).await.map_err(|e| {
        (
            ExtractorError::PathResolution(format!("file not readable: {}", e)),
            file_size,
        )
    })?;

    debug!("Resolved '{}' as {} ({} bytes)", path, file_type, file_size);

    Ok(ResolvedFile {
        path: path.to_string(),
        file_type,
        file_size,
    })
}
