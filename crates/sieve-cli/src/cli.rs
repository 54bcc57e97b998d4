//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use sieve_export::ExportKind;
use std::path::PathBuf;

/// Sieve - extract structured elements from document files.
#[derive(Debug, Parser)]
#[command(name = "sieve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory that exports are written to
    #[arg(long, global = true, env = "SIEVE_EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    /// Log pipeline activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (status and filename only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process files and print the per-file outcome
    Process(ProcessArgs),

    /// List the supported file formats
    Formats,

    /// Show a sample workflow
    Demo,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the process command.
#[derive(Debug, Parser)]
pub struct ProcessArgs {
    /// Files to process, in order
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Preview the extracted elements afterwards
    #[arg(long)]
    pub show: bool,

    /// Export the results afterwards (all formats unless one is given)
    #[arg(long, value_enum, num_args = 0..=1, default_missing_value = "all")]
    pub export: Option<ExportFormatArg>,
}

/// Export format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormatArg {
    /// JSON, CSV and text
    All,
    /// Nested JSON records
    Json,
    /// Per-file CSV summary
    Csv,
    /// Plain-text report
    Text,
}

impl ExportFormatArg {
    /// Export kinds this argument selects.
    pub fn kinds(self) -> Vec<ExportKind> {
        match self {
            ExportFormatArg::All => ExportKind::ALL.to_vec(),
            ExportFormatArg::Json => vec![ExportKind::Json],
            ExportFormatArg::Csv => vec![ExportKind::Csv],
            ExportFormatArg::Text => vec![ExportKind::Text],
        }
    }
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_repl() {
        let cli = Cli::parse_from(["sieve"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_process_command() {
        let cli = Cli::parse_from(["sieve", "process", "a.pdf", "b.txt", "--show"]);
        match cli.command {
            Some(Command::Process(args)) => {
                assert_eq!(args.paths, vec!["a.pdf", "b.txt"]);
                assert!(args.show);
                assert!(args.export.is_none());
            }
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_process_export_flag() {
        let cli = Cli::parse_from(["sieve", "process", "a.txt", "--export"]);
        match cli.command {
            Some(Command::Process(args)) => assert_eq!(args.export, Some(ExportFormatArg::All)),
            _ => panic!("Expected Process command"),
        }

        let cli = Cli::parse_from(["sieve", "process", "a.txt", "--export", "csv"]);
        match cli.command {
            Some(Command::Process(args)) => {
                assert_eq!(args.export.map(ExportFormatArg::kinds), Some(vec![ExportKind::Csv]));
            }
            _ => panic!("Expected Process command"),
        }
    }

    #[test]
    fn test_process_requires_paths() {
        assert!(Cli::try_parse_from(["sieve", "process"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["sieve", "--no-color", "-v", "--export-dir", "/tmp/out", "demo"]);
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert_eq!(cli.export_dir, Some(PathBuf::from("/tmp/out")));
        assert!(matches!(cli.command, Some(Command::Demo)));
    }
}
