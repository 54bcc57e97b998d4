//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use sieve_domain::{FileStatus, ProcessedFile, ProcessingSession, SessionStats};
use sieve_export::ExportKind;
use sieve_extractor::{FilePreview, ProgressEvent, ProgressSink};
use std::path::PathBuf;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the outcome of one `process` batch.
    pub fn format_batch(&self, files: &[ProcessedFile]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_batch_json(files),
            OutputFormat::Table => Ok(self.format_batch_table(files)),
            OutputFormat::Quiet => Ok(self.format_batch_quiet(files)),
        }
    }

    /// Same record layout as the JSON export.
    fn format_batch_json(&self, files: &[ProcessedFile]) -> Result<String> {
        if files.is_empty() {
            return Ok("[]".to_string());
        }

        let mut batch = ProcessingSession::started_at(0);
        for file in files {
            batch.push(file.clone());
        }
        Ok(sieve_export::render(&batch, ExportKind::Json)?.trim_end().to_string())
    }

    /// Format files as a table.
    fn format_batch_table(&self, files: &[ProcessedFile]) -> String {
        if files.is_empty() {
            return self.colorize("No files processed.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "File", "Type", "Status", "Elements", "Words", "Size", "Detail"]);

        for (i, file) in files.iter().enumerate() {
            builder.push_record([
                (i + 1).to_string(),
                file.filename.clone(),
                file.file_type.clone(),
                self.status_label(file.status),
                file.element_count().to_string(),
                file.word_count().to_string(),
                format_size(file.file_size),
                file.error_detail.clone().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format files in quiet mode (status and filename only).
    fn format_batch_quiet(&self, files: &[ProcessedFile]) -> String {
        files
            .iter()
            .map(|f| format!("{}\t{}", f.status, f.filename))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format session totals.
    pub fn format_stats(&self, stats: &SessionStats) -> String {
        let mut out = format!(
            "{} files ({} success, {} partial, {} failed), {} elements, {} words, {}",
            stats.total_files,
            stats.count(FileStatus::Success),
            stats.count(FileStatus::PartialSuccess),
            stats.count(FileStatus::Failed),
            stats.total_elements,
            stats.total_words,
            format_size(stats.total_bytes),
        );

        if !stats.by_element_type.is_empty() {
            let types: Vec<String> = stats
                .by_element_type
                .iter()
                .map(|(element_type, count)| format!("{}: {}", element_type, count))
                .collect();
            out.push_str(&format!("\n  by type: {}", types.join(", ")));
        }

        out
    }

    /// Format the bounded session preview.
    pub fn format_preview(&self, previews: &[FilePreview]) -> String {
        let mut out = String::new();

        for (i, file) in previews.iter().enumerate() {
            let heading = format!("{}. {} [{}]", i + 1, file.filename, self.status_label(file.status));
            out.push_str(&self.colorize(&heading, "cyan"));
            out.push('\n');
            out.push_str(&format!(
                "   Elements: {}  Words: {}  Size: {}  Type: {}\n",
                file.element_count,
                file.word_count,
                format_size(file.file_size),
                file.file_type
            ));
            if let Some(detail) = &file.error_detail {
                out.push_str(&format!("   {}\n", self.warning(detail)));
            }

            for (j, element) in file.elements.iter().enumerate() {
                out.push_str(&format!("   {}. {}\n", j + 1, element.element_type));
                out.push_str(&format!("      {}\n", element.text));
            }
            if file.remaining > 0 {
                out.push_str(&format!("   ... and {} more elements\n", file.remaining));
            }
            out.push('\n');
        }

        out.trim_end().to_string()
    }

    /// Format the list of written export files.
    pub fn export_result(&self, paths: &[PathBuf]) -> String {
        let mut out = self.success(&format!("Exported {} file(s)", paths.len()));
        for path in paths {
            out.push_str(&format!("\n  {}", path.display()));
        }
        out
    }

    /// Status text, colored by outcome.
    pub fn status_label(&self, status: FileStatus) -> String {
        let color = match status {
            FileStatus::Success => "green",
            FileStatus::PartialSuccess => "yellow",
            FileStatus::Failed => "red",
        };
        self.colorize(status.as_str(), color)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Human-readable byte count.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Prints progress events to stderr so stdout stays parseable.
pub struct ConsoleProgress<'a> {
    formatter: &'a Formatter,
}

impl<'a> ConsoleProgress<'a> {
    /// Create a progress printer.
    pub fn new(formatter: &'a Formatter) -> Self {
        Self { formatter }
    }

    /// Text for one event, if it is worth showing.
    pub fn describe(&self, event: &ProgressEvent) -> Option<String> {
        let f = self.formatter;
        match event {
            ProgressEvent::BatchStarted { total_files } => {
                Some(f.info(&format!("Processing {} file(s)...", total_files)))
            }
            ProgressEvent::FileStarted {
                index,
                total,
                filename,
                ocr,
            } => {
                let mut line = f.info(&format!("[{}/{}] {}", index, total, filename));
                if *ocr {
                    line.push_str(&format!("\n{}", f.warning("Image file: OCR may take a while")));
                }
                Some(line)
            }
            ProgressEvent::ElementsFound { .. } => None,
            ProgressEvent::ElementsProcessed {
                filename,
                processed,
                total,
            } => Some(format!("      {}: {}/{} elements", filename, processed, total)),
            ProgressEvent::FileCompleted {
                index,
                total,
                filename,
                status,
                element_count,
                word_count,
                error_detail,
                ..
            } => {
                let summary = format!(
                    "[{}/{}] {}: {} elements, {} words",
                    index, total, filename, element_count, word_count
                );
                Some(match (status, error_detail) {
                    (FileStatus::Success, _) => f.success(&summary),
                    (FileStatus::PartialSuccess, Some(detail)) => f.warning(&format!("{} ({})", summary, detail)),
                    (FileStatus::PartialSuccess, None) => f.warning(&summary),
                    (FileStatus::Failed, detail) => f.error(&format!(
                        "[{}/{}] {}: {}",
                        index,
                        total,
                        filename,
                        detail.as_deref().unwrap_or("failed")
                    )),
                })
            }
            ProgressEvent::BatchCompleted { stats } => Some(f.info(&format!(
                "Batch done: {} of {} file(s) produced elements",
                stats.total_files - stats.count(FileStatus::Failed),
                stats.total_files
            ))),
        }
    }
}

impl ProgressSink for ConsoleProgress<'_> {
    fn emit(&mut self, event: ProgressEvent) {
        if let Some(line) = self.describe(&event) {
            eprintln!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sieve_domain::{Element, ElementType};

    fn processed(path: &str, texts: &[&str]) -> ProcessedFile {
        let mut file = ProcessedFile::failed(path, 2048, "unused");
        file.elements = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Element::new(ElementType::Narrative, *t, i))
            .collect();
        file.raw_element_count = texts.len();
        file.status = FileStatus::Success;
        file.error_detail = None;
        file
    }

    fn batch() -> Vec<ProcessedFile> {
        vec![
            processed("/docs/a.pdf", &["hello world", "again"]),
            ProcessedFile::failed("/docs/b.unknownext", 0, "unsupported format"),
        ]
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_batch(&batch()).unwrap();
        assert!(output.contains("Status"));
        assert!(output.contains("a.pdf"));
        assert!(output.contains("unsupported format"));
        assert!(output.contains("2.0 KB"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_batch(&batch()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["word_count"], 3);
        assert_eq!(parsed[1]["status"], "failed");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_batch(&batch()).unwrap();
        assert_eq!(output, "success\ta.pdf\nfailed\tb.unknownext");
    }

    #[test]
    fn test_empty_batch() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_batch(&[]).unwrap();
        assert!(output.contains("No files processed"));
    }

    #[test]
    fn test_stats_line() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let stats = SessionStats::from_files(&batch());
        let output = formatter.format_stats(&stats);
        assert!(output.starts_with("2 files (1 success, 0 partial, 1 failed), 2 elements, 3 words"));
        assert!(output.contains("by type: narrative: 2"));
    }

    #[test]
    fn test_preview_shows_remaining() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let preview = FilePreview {
            filename: "a.txt".to_string(),
            file_type: ".txt".to_string(),
            file_size: 10,
            status: FileStatus::Success,
            error_detail: None,
            element_count: 7,
            word_count: 7,
            elements: Vec::new(),
            remaining: 2,
        };
        let output = formatter.format_preview(&[preview]);
        assert!(output.starts_with("1. a.txt [success]"));
        assert!(output.contains("... and 2 more elements"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_progress_descriptions() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let progress = ConsoleProgress::new(&formatter);

        let started = progress.describe(&ProgressEvent::FileStarted {
            index: 1,
            total: 2,
            filename: "scan.png".to_string(),
            ocr: true,
        });
        assert!(started.unwrap().contains("OCR"));

        let failed = progress.describe(&ProgressEvent::FileCompleted {
            index: 2,
            total: 2,
            filename: "b.unknownext".to_string(),
            status: FileStatus::Failed,
            element_count: 0,
            word_count: 0,
            skipped: 0,
            error_detail: Some("unsupported format".to_string()),
        });
        assert_eq!(failed.unwrap(), "✗ [2/2] b.unknownext: unsupported format");

        assert!(progress
            .describe(&ProgressEvent::ElementsFound {
                filename: "a.txt".to_string(),
                total: 3
            })
            .is_none());
    }
}
