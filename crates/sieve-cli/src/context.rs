//! Per-user session context.

use crate::config::Config;
use sieve_domain::ProcessedFile;
use sieve_extractor::{
    Dispatcher, Extractor, ExtractorConfig, ExtractorRegistry, FilePreview, PlainTextService,
    ProgressSink, SessionAggregator,
};
use std::path::{Path, PathBuf};

/// Everything one interactive user owns: the pipeline, their session and
/// where their exports go.
///
/// Each REPL or one-shot invocation builds its own context; nothing here is
/// shared between users.
#[derive(Debug)]
pub struct SessionContext {
    dispatcher: Dispatcher,
    session: SessionAggregator,
    export_dir: PathBuf,
}

impl SessionContext {
    /// Create a context around an existing dispatcher.
    pub fn new(dispatcher: Dispatcher, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            dispatcher,
            session: SessionAggregator::new(),
            export_dir: export_dir.into(),
        }
    }

    /// Build the default pipeline from configuration.
    ///
    /// `export_dir` overrides the configured export directory.
    pub fn from_config(config: &Config, export_dir: Option<PathBuf>) -> Self {
        let dispatcher = Dispatcher::new(Extractor::new(
            default_registry(),
            config.extractor.clone(),
        ));
        let export_dir = export_dir.unwrap_or_else(|| config.settings.export_dir.clone());
        Self::new(dispatcher, export_dir)
    }

    /// Run a `process` batch against this session.
    pub async fn process(&mut self, paths: &[String], sink: &mut dyn ProgressSink) -> Vec<ProcessedFile> {
        self.dispatcher.dispatch(paths, &mut self.session, sink).await
    }

    /// Bounded preview using the configured limits.
    pub fn preview(&self) -> Vec<FilePreview> {
        let config = self.extractor_config();
        self.session
            .preview(config.preview_elements, config.preview_text_chars)
    }

    /// The live session.
    pub fn session(&self) -> &SessionAggregator {
        &self.session
    }

    /// Discard every processed file.
    pub fn clear(&mut self) {
        self.session.clear();
    }

    /// Where exports are written.
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Active extractor configuration.
    pub fn extractor_config(&self) -> &ExtractorConfig {
        self.dispatcher.extractor().config()
    }
}

/// Plain-text backend for every format; formats it cannot read fail per file.
pub fn default_registry() -> ExtractorRegistry {
    ExtractorRegistry::new(PlainTextService::new())
}
