//! Extraction strategy registry
//!
//! Maps each supported file type to the service that extracts it. Looked up
//! once per file by the dispatcher; adding a backend never touches call sites.

use sieve_domain::{ExtractionService, FileType};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of extraction services keyed by file type
#[derive(Clone)]
pub struct ExtractorRegistry {
    default_service: Arc<dyn ExtractionService>,
    overrides: HashMap<FileType, Arc<dyn ExtractionService>>,
}

impl ExtractorRegistry {
    /// Create a registry where every file type uses `default_service`
    pub fn new(default_service: impl ExtractionService + 'static) -> Self {
        Self {
            default_service: Arc::new(default_service),
            overrides: HashMap::new(),
        }
    }

    /// Route one file type to a dedicated service
    pub fn register(&mut self, file_type: FileType, service: impl ExtractionService + 'static) {
        self.overrides.insert(file_type, Arc::new(service));
    }

    /// Builder form of [`register`](Self::register)
    pub fn with_service(mut self, file_type: FileType, service: impl ExtractionService + 'static) -> Self {
        self.register(file_type, service);
        self
    }

    /// Service responsible for `file_type`
    pub fn resolve(&self, file_type: FileType) -> Arc<dyn ExtractionService> {
        self.overrides
            .get(&file_type)
            .cloned()
            .unwrap_or_else(|| Arc::clone(&self.default_service))
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut overrides: Vec<_> = self
            .overrides
            .iter()
            .map(|(file_type, service)| (file_type.extension(), service.name().to_string()))
            .collect();
        overrides.sort();

        f.debug_struct("ExtractorRegistry")
            .field("default", &self.default_service.name())
            .field("overrides", &overrides)
            .finish()
    }
}
