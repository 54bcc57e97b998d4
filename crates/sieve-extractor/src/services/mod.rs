//! Bundled extraction services
//!
//! - `PlainTextService`: text-like formats read straight from disk
//! - `MockService`: deterministic, scripted service for testing

pub mod mock;
pub mod plain_text;

pub use mock::MockService;
pub use plain_text::PlainTextService;
