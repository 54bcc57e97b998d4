//! Full REPL-style workflow through the library API

use sieve_cli::commands;
use sieve_cli::config::{Config, OutputFormat};
use sieve_cli::{CliError, Formatter, SessionContext};
use sieve_domain::FileStatus;
use sieve_export::{ExportError, ExportKind};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[tokio::test]
async fn test_process_show_export_clear() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let notes = write(&input, "notes.md", "# Plan\n\nShip the parser first.\n\n- tests\n- docs\n");
    let scan = write(&input, "scan.pdf", "%PDF-1.7");

    let formatter = Formatter::new(OutputFormat::Quiet, false);
    let mut context = SessionContext::from_config(&Config::default(), Some(output.path().to_path_buf()));

    let batch = commands::execute_process(
        &[notes, "b.unknownext".to_string(), scan],
        &mut context,
        &formatter,
    )
    .await
    .unwrap();

    let statuses: Vec<FileStatus> = batch.iter().map(|f| f.status).collect();
    assert_eq!(
        statuses,
        vec![FileStatus::Success, FileStatus::Failed, FileStatus::Failed]
    );

    let preview = context.preview();
    assert_eq!(preview.len(), 3);
    assert_eq!(preview[0].elements.len(), 4);
    let shown = commands::show_text(&context, &formatter);
    assert!(shown.starts_with("3 files (1 success, 0 partial, 2 failed), 4 elements, 7 words"));
    assert!(shown.contains("scan.pdf"));
    commands::execute_show(&context, &formatter);

    let written = commands::execute_export(&ExportKind::ALL, &context, &formatter).unwrap();
    assert_eq!(written.len(), 3);

    let csv = std::fs::read_to_string(
        written
            .iter()
            .find(|p| p.extension().is_some_and(|e| e == "csv"))
            .unwrap(),
    )
    .unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("notes.md,4,7,"));

    commands::execute_clear(&mut context, &formatter);
    assert!(commands::show_text(&context, &formatter).contains("No files processed yet"));
    let result = commands::execute_export(&ExportKind::ALL, &context, &formatter);
    assert!(matches!(result, Err(CliError::Export(ExportError::EmptySession))));
}

#[tokio::test]
async fn test_two_users_do_not_share_state() {
    let input = TempDir::new().unwrap();
    let path = write(&input, "a.txt", "Hello there.");
    let formatter = Formatter::new(OutputFormat::Quiet, false);

    let mut first = SessionContext::from_config(&Config::default(), None);
    let mut second = SessionContext::from_config(&Config::default(), None);

    commands::execute_process(&[path], &mut first, &formatter)
        .await
        .unwrap();
    commands::execute_clear(&mut second, &formatter);

    assert_eq!(first.session().stats().total_files, 1);
    assert!(second.session().is_empty());
}
