//! Sieve Extractor
//!
//! Turns document files into canonical elements and accumulates them in a
//! processing session.
//!
//! # Overview
//!
//! Each submitted path is validated, routed to an extraction service by its
//! file type, and normalized element by element. A broken file fails on its
//! own without stopping the batch. A broken element is skipped without
//! failing its file.
//!
//! # Architecture
//!
//! ```text
//! paths → Dispatcher → Extractor → ExtractionService → normalize → SessionAggregator
//!                          ↓
//!                    ProgressSink
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use sieve_extractor::{
//!     Dispatcher, Extractor, ExtractorConfig, ExtractorRegistry, LogSink,
//!     PlainTextService, SessionAggregator,
//! };
//!
//! # async fn example() {
//! let registry = ExtractorRegistry::new(PlainTextService::new());
//! let dispatcher = Dispatcher::new(Extractor::new(registry, ExtractorConfig::default()));
//! let mut session = SessionAggregator::new();
//!
//! let paths = vec!["notes.md".to_string(), "report.txt".to_string()];
//! let batch = dispatcher.dispatch(&paths, &mut session, &mut LogSink).await;
//!
//! for file in &batch {
//!     println!("{}: {} ({} elements)", file.filename, file.status, file.element_count());
//! }
//! println!("{}", session.stats().summary());
//! # }
//! ```

#![warn(missing_docs)]

mod aggregator;
mod config;
mod dispatcher;
mod error;
mod extractor;
mod normalizer;
mod progress;
mod registry;
pub mod services;


pub use aggregator::{ElementPreview, FilePreview, SessionAggregator};
pub use config::ExtractorConfig;
pub use dispatcher::Dispatcher;
pub use error::{ExtractorError, NormalizationError};
pub use extractor::{Extractor, ResolvedFile};
pub use normalizer::normalize;
pub use progress::{LogSink, NoopSink, ProgressEvent, ProgressReporter, ProgressSink};
pub use registry::ExtractorRegistry;
pub use services::{MockService, PlainTextService};
