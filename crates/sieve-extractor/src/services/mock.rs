//! Mock extraction service for deterministic testing

use sieve_domain::{ExtractionService, FileType, RawElement, ServiceError};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
enum Script {
    Elements(Vec<RawElement>),
    Fail(String),
}

/// Mock extraction service
///
/// Returns pre-configured raw elements (or a failure) per path without
/// touching the file. Scripts are matched on the full path first, then on
/// the file name. Unscripted files yield no elements.
///
/// # Examples
///
/// ```
/// use sieve_domain::{ExtractionService, FileType, RawElement};
/// use sieve_extractor::MockService;
/// use std::path::Path;
///
/// let service = MockService::new()
///     .with_elements("a.pdf", vec![RawElement::new("Title", "Hello")])
///     .with_failure("c.pdf", "corrupt xref table");
///
/// let items = service.partition(Path::new("/tmp/a.pdf"), FileType::Pdf).unwrap();
/// assert_eq!(items.len(), 1);
/// assert!(service.partition(Path::new("c.pdf"), FileType::Pdf).is_err());
/// assert_eq!(service.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockService {
    name: String,
    scripts: Arc<Mutex<HashMap<String, Script>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockService {
    /// Create an unscripted mock named "mock"
    pub fn new() -> Self {
        Self::named("mock")
    }

    /// Create an unscripted mock with a custom name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scripts: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Return `elements` for files matching `key`
    pub fn add_elements(&mut self, key: impl Into<String>, elements: Vec<RawElement>) {
        lock(&self.scripts).insert(key.into(), Script::Elements(elements));
    }

    /// Fail every extraction of files matching `key`
    pub fn add_failure(&mut self, key: impl Into<String>, message: impl Into<String>) {
        lock(&self.scripts).insert(key.into(), Script::Fail(message.into()));
    }

    /// Builder form of [`add_elements`](Self::add_elements)
    pub fn with_elements(mut self, key: impl Into<String>, elements: Vec<RawElement>) -> Self {
        self.add_elements(key, elements);
        self
    }

    /// Builder form of [`add_failure`](Self::add_failure)
    pub fn with_failure(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.add_failure(key, message);
        self
    }

    /// Number of times `partition` was called
    pub fn call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *lock(&self.call_count) = 0;
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionService for MockService {
    fn name(&self) -> &str {
        &self.name
    }

    fn partition(&self, path: &Path, _file_type: FileType) -> Result<Vec<RawElement>, ServiceError> {
        *lock(&self.call_count) += 1;

        let scripts = lock(&self.scripts);
        let full = path.to_string_lossy();
        let script = scripts.get(full.as_ref()).or_else(|| {
            path.file_name()
                .and_then(|name| scripts.get(name.to_string_lossy().as_ref()))
        });

        match script {
            Some(Script::Elements(elements)) => Ok(elements.clone()),
            Some(Script::Fail(message)) => Err(ServiceError::new(message.clone())),
            None => Ok(Vec::new()),
        }
    }
}

// A panicking test thread must not wedge the other users of the mock
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
