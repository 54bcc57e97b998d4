//! Export format selection and dispatch to the renderers

use crate::error::{ExportError, Result};
use crate::{json, report, summary};
use sieve_domain::ProcessingSession;
use std::fmt;
use std::str::FromStr;

/// One of the three export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExportKind {
    /// Nested per-file records with every element
    Json,
    /// One summary row per file
    Csv,
    /// Human-readable report grouped by file
    Text,
}

impl ExportKind {
    /// Every format, in the order `export` writes them
    pub const ALL: [ExportKind; 3] = [ExportKind::Json, ExportKind::Csv, ExportKind::Text];

    /// File extension (without dot)
    pub fn extension(&self) -> &'static str {
        match self {
            ExportKind::Json => "json",
            ExportKind::Csv => "csv",
            ExportKind::Text => "txt",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportKind::Json => "json",
            ExportKind::Csv => "csv",
            ExportKind::Text => "text",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ExportKind {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportKind::Json),
            "csv" => Ok(ExportKind::Csv),
            "text" | "txt" => Ok(ExportKind::Text),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render `session` in one format
///
/// Pure function of the session: the same session always renders to the same
/// string. Fails on an empty session.
pub fn render(session: &ProcessingSession, kind: ExportKind) -> Result<String> {
    if session.is_empty() {
        return Err(ExportError::EmptySession);
    }

    match kind {
        ExportKind::Json => json::render(session),
        ExportKind::Csv => summary::render(session),
        ExportKind::Text => Ok(report::render(session)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!("JSON".parse::<ExportKind>().unwrap(), ExportKind::Json);
        assert_eq!("txt".parse::<ExportKind>().unwrap(), ExportKind::Text);
        assert_eq!(" csv ".parse::<ExportKind>().unwrap(), ExportKind::Csv);
        assert!(matches!(
            "xml".parse::<ExportKind>(),
            Err(ExportError::UnknownFormat(name)) if name == "xml"
        ));
    }

    #[test]
    fn test_extensions() {
        let extensions: Vec<&str> = ExportKind::ALL.iter().map(|k| k.extension()).collect();
        assert_eq!(extensions, vec!["json", "csv", "txt"]);
    }

    #[test]
    fn test_empty_session_is_rejected() {
        let session = ProcessingSession::new();
        for kind in ExportKind::ALL {
            assert!(matches!(render(&session, kind), Err(ExportError::EmptySession)));
        }
    }
}
