//! Sieve Export
//!
//! Renders a processing session as JSON, CSV or a plain-text report, and
//! writes exports to disk.
//!
//! - **JSON**: one nested record per file, with every element, its metadata
//!   and coordinates. Metadata that JSON cannot hold (raw bytes, non-finite
//!   floats) is coerced to strings here and nowhere else.
//! - **CSV**: one summary row per file.
//! - **Text**: a report grouped by file, one `[TYPE]` block per element.
//!
//! Rendering is a pure function of the session. Two exports of an unchanged
//! session are byte-identical.
//!
//! # Example
//!
//! ```no_run
//! use sieve_domain::ProcessingSession;
//! use sieve_export::{export, ExportKind};
//! use std::path::Path;
//!
//! # fn example(session: &ProcessingSession) -> sieve_export::Result<()> {
//! let written = export(session, &ExportKind::ALL, Path::new("exports"))?;
//! for path in written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod format;
mod json;
mod report;
mod summary;
mod writer;

pub use error::{ExportError, Result};
pub use format::{render, ExportKind};
pub use writer::{export, file_stem};
