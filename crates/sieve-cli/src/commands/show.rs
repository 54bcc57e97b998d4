//! Show command implementation.

use crate::context::SessionContext;
use crate::output::Formatter;

/// Execute the show command.
pub fn execute_show(context: &SessionContext, formatter: &Formatter) {
    println!("{}", show_text(context, formatter));
}

/// Session stats followed by the bounded preview.
pub fn show_text(context: &SessionContext, formatter: &Formatter) -> String {
    if context.session().is_empty() {
        return formatter.info("No files processed yet. Use 'process <path>' first.");
    }

    format!(
        "{}\n\n{}",
        formatter.format_stats(&context.session().stats()),
        formatter.format_preview(&context.preview())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, OutputFormat};
    use sieve_extractor::NoopSink;
    use tempfile::TempDir;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Table, false)
    }

    #[test]
    fn test_show_empty_session() {
        let context = SessionContext::from_config(&Config::default(), None);

        assert_eq!(
            show_text(&context, &formatter()),
            "ℹ No files processed yet. Use 'process <path>' first."
        );
    }

    #[tokio::test]
    async fn test_show_stats_and_preview() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.md");
        std::fs::write(&path, "# Plan\n\nShip the parser first.\n").unwrap();

        let mut context = SessionContext::from_config(&Config::default(), None);
        context
            .process(
                &[path.to_string_lossy().into_owned(), "b.unknownext".to_string()],
                &mut NoopSink,
            )
            .await;

        let text = show_text(&context, &formatter());

        assert!(text.starts_with("2 files (1 success, 0 partial, 1 failed), 2 elements, 5 words"));
        assert!(text.contains("1. notes.md"));
        assert!(text.contains("      Ship the parser first."));
        assert!(text.contains("2. b.unknownext"));
        assert!(text.contains("unsupported format"));
    }

    #[tokio::test]
    async fn test_show_after_clear_is_empty_again() {
        let mut context = SessionContext::from_config(&Config::default(), None);
        context.process(&["missing.txt".to_string()], &mut NoopSink).await;
        assert!(show_text(&context, &formatter()).contains("missing.txt"));

        context.clear();

        assert!(show_text(&context, &formatter()).contains("No files processed yet"));
    }
}
