//! CSV renderer - one summary row per file

use crate::error::{ExportError, Result};
use serde::Serialize;
use sieve_domain::ProcessingSession;

/// Column order doubles as the header row
#[derive(Serialize)]
struct SummaryRow<'a> {
    filename: &'a str,
    element_count: usize,
    word_count: usize,
    file_size: u64,
    file_type: &'a str,
}

/// Render the session as CSV with a header row
pub fn render(session: &ProcessingSession) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for file in &session.files {
        writer.serialize(SummaryRow {
            filename: &file.filename,
            element_count: file.element_count(),
            word_count: file.word_count(),
            file_size: file.file_size,
            file_type: &file.file_type,
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;

    // Every field came from a `String`, so the output is valid UTF-8
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
