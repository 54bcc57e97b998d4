//! Sieve CLI - extract structured elements from document files.

use clap::Parser;
use sieve_cli::commands;
use sieve_cli::repl;
use sieve_cli::{Cli, Command, Config, Formatter, SessionContext};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> sieve_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load config; write the defaults on first run
    let config = Config::load(cli.config.as_deref())?;
    if cli.config.is_none() {
        if let Ok(path) = Config::default_path() {
            if !path.exists() {
                config.save(&path).ok();
            }
        }
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            let mut context = SessionContext::from_config(&config, cli.export_dir);
            repl::run_repl(&config, &mut context, &formatter).await?;
        }
        Some(Command::Process(args)) => {
            let mut context = SessionContext::from_config(&config, cli.export_dir);
            commands::execute_process(&args.paths, &mut context, &formatter).await?;
            if args.show {
                commands::execute_show(&context, &formatter);
            }
            if let Some(export) = args.export {
                commands::execute_export(&export.kinds(), &context, &formatter)?;
            }
        }
        Some(Command::Formats) => commands::print_formats(&formatter),
        Some(Command::Demo) => commands::print_demo(&formatter),
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
