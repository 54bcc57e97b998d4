//! Process command implementation.

use crate::context::SessionContext;
use crate::error::{CliError, Result};
use crate::config::OutputFormat;
use crate::output::{ConsoleProgress, Formatter};
use sieve_domain::ProcessedFile;
use sieve_extractor::LogSink;

/// Execute the process command.
pub async fn execute_process(
    paths: &[String],
    context: &mut SessionContext,
    formatter: &Formatter,
) -> Result<Vec<ProcessedFile>> {
    if paths.is_empty() {
        return Err(CliError::InvalidInput(
            "Please provide file paths. Example: process /path/to/file.pdf".to_string(),
        ));
    }

    // Quiet output keeps stderr clean; progress still reaches the log.
    let batch = if formatter.format() == OutputFormat::Quiet {
        context.process(paths, &mut LogSink).await
    } else {
        let mut progress = ConsoleProgress::new(formatter);
        context.process(paths, &mut progress).await
    };

    println!("{}", formatter.format_batch(&batch)?);

    Ok(batch)
}
