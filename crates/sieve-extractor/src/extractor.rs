//! Fault-isolating extraction wrapper
//!
//! One call into the extraction service per file. A failed call fails the
//! file; a malformed raw element only costs that element.

use crate::config::ExtractorConfig;
use crate::error::{ExtractorError, NormalizationError};
use crate::normalizer::normalize;
use crate::progress::{ProgressEvent, ProgressReporter};
use crate::registry::ExtractorRegistry;
use sieve_domain::processed_file::describe_path;
use sieve_domain::{FileStatus, FileType, ProcessedFile, RawElement};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// A path that passed dispatcher validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Path as submitted
    pub path: String,

    /// Format from the supported-format registry
    pub file_type: FileType,

    /// Size in bytes
    pub file_size: u64,
}

/// Wraps the extraction service with per-element fault isolation
#[derive(Debug, Clone)]
pub struct Extractor {
    registry: ExtractorRegistry,
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new Extractor
    pub fn new(registry: ExtractorRegistry, config: ExtractorConfig) -> Self {
        Self { registry, config }
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract and normalize one validated file
    ///
    /// Never returns an error: every failure ends up on the `ProcessedFile`.
    pub async fn extract(
        &self,
        file: &ResolvedFile,
        progress: &mut ProgressReporter<'_>,
    ) -> ProcessedFile {
        let start = Instant::now();
        let (filename, file_type) = describe_path(&file.path);

        let mut result = ProcessedFile {
            path: file.path.clone(),
            filename,
            file_type,
            format: Some(file.file_type),
            file_size: file.file_size,
            elements: Vec::new(),
            raw_element_count: 0,
            status: FileStatus::Failed,
            error_detail: None,
            failure_notes: Vec::new(),
        };

        let raw_elements = match self.call_service(file).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Extraction of '{}' failed: {}", file.path, e);
                result.error_detail = Some(e.to_string());
                return result;
            }
        };

        let total = raw_elements.len();
        result.raw_element_count = total;
        progress.emit(ProgressEvent::ElementsFound {
            filename: result.filename.clone(),
            total,
        });

        let mut skipped_by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
        let mut suppressed = false;

        for (index, raw) in raw_elements.into_iter().enumerate() {
            match normalize(raw, index) {
                Ok(element) => result.elements.push(element),
                Err(e) => {
                    *skipped_by_kind.entry(e.kind()).or_insert(0) += 1;
                    self.note_failure(&mut result, index, &e, &mut suppressed);
                }
            }
            progress.element_done(&result.filename, index + 1, total);
        }

        let skipped = total - result.elements.len();
        result.status = FileStatus::derive(result.elements.len(), skipped);
        result.error_detail = match result.status {
            FileStatus::Success => None,
            FileStatus::PartialSuccess => Some(format!(
                "skipped {} of {} elements ({})",
                skipped,
                total,
                summarize_kinds(&skipped_by_kind)
            )),
            FileStatus::Failed if total == 0 => Some("no elements extracted".to_string()),
            FileStatus::Failed => Some(format!(
                "all {} elements failed normalization ({})",
                total,
                summarize_kinds(&skipped_by_kind)
            )),
        };

        info!(
            "Extracted '{}': {} elements, {} skipped, {} words in {}ms",
            result.filename,
            result.element_count(),
            skipped,
            result.word_count(),
            start.elapsed().as_millis()
        );

        result
    }

    /// Call the extraction service off the async executor
    async fn call_service(&self, file: &ResolvedFile) -> Result<Vec<RawElement>, ExtractorError> {
        let service = self.registry.resolve(file.file_type);
        let path = PathBuf::from(&file.path);
        let file_type = file.file_type;

        debug!("Extracting '{}' with service '{}'", file.path, service.name());

        // Service calls are blocking parsers
        let raw = tokio::task::spawn_blocking(move || service.partition(&path, file_type))
            .await??;

        Ok(raw)
    }

    /// Record a skipped element, keeping notes and log lines bounded
    fn note_failure(
        &self,
        result: &mut ProcessedFile,
        index: usize,
        error: &NormalizationError,
        suppressed: &mut bool,
    ) {
        if result.failure_notes.len() < self.config.max_failure_notes {
            warn!(
                "Skipped element {} of '{}': {}",
                index + 1,
                result.filename,
                error
            );
            result
                .failure_notes
                .push(format!("element {}: {}", index + 1, error));
        } else if !*suppressed {
            warn!(
                "Further element failures in '{}' are not logged individually",
                result.filename
            );
            *suppressed = true;
        }
    }
}

fn summarize_kinds(kinds: &BTreeMap<&'static str, usize>) -> String {
    kinds
        .iter()
        .map(|(kind, count)| format!("{}: {}", kind, count))
        .collect::<Vec<_>>()
        .join(", ")
}
