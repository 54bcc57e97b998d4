//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands;
use crate::config::{sieve_home, Config};
use crate::context::SessionContext;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sieve_export::ExportKind;
use std::path::PathBuf;
use tracing::debug;

/// Run the interactive REPL.
pub async fn run_repl(config: &Config, context: &mut SessionContext, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Sieve REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    loop {
        let prompt = if context.session().is_empty() {
            "sieve> ".to_string()
        } else {
            format!("sieve ({} files)> ", context.session().current_session().files.len())
        };

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                // Parse command
                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, context, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Exit,
    Help,
    Demo,
    Process(Vec<String>),
    Show,
    Export(Vec<ExportKind>),
    Clear,
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0].to_lowercase().as_str() {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" | "info" => Ok(ReplCommand::Help),
        "demo" | "example" | "sample" => Ok(ReplCommand::Demo),
        "show" | "preview" | "view" => Ok(ReplCommand::Show),
        "clear" | "reset" | "new" => Ok(ReplCommand::Clear),
        "process" => parse_process_command(&parts[1..]),
        "export" | "download" | "save" => parse_export_command(&parts[1..]),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a REPL command.
async fn execute_repl_command(
    cmd: ReplCommand,
    context: &mut SessionContext,
    formatter: &Formatter,
) -> Result<()> {
    debug!(?cmd, "repl command");

    match cmd {
        ReplCommand::Exit => {}
        ReplCommand::Help => commands::print_help(formatter),
        ReplCommand::Demo => commands::print_demo(formatter),
        ReplCommand::Process(paths) => {
            commands::execute_process(&paths, context, formatter).await?;
            println!("{}", formatter.format_stats(&context.session().stats()));
        }
        ReplCommand::Show => commands::execute_show(context, formatter),
        ReplCommand::Export(kinds) => {
            commands::execute_export(&kinds, context, formatter)?;
        }
        ReplCommand::Clear => commands::execute_clear(context, formatter),
    }

    Ok(())
}

fn parse_process_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: process <path> [<path> ...]".to_string(),
        ));
    }

    Ok(ReplCommand::Process(args.iter().map(|s| s.to_string()).collect()))
}

fn parse_export_command(args: &[&str]) -> Result<ReplCommand> {
    match args {
        [] => Ok(ReplCommand::Export(ExportKind::ALL.to_vec())),
        [format] if format.eq_ignore_ascii_case("all") => Ok(ReplCommand::Export(ExportKind::ALL.to_vec())),
        formats => {
            let mut kinds = Vec::with_capacity(formats.len());
            for format in formats {
                let kind: ExportKind = format.parse()?;
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
            Ok(ReplCommand::Export(kinds))
        }
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = sieve_home()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}
