//! Export command implementation.

use crate::context::SessionContext;
use crate::error::Result;
use crate::output::Formatter;
use sieve_export::ExportKind;
use std::path::PathBuf;

/// Execute the export command.
pub fn execute_export(
    kinds: &[ExportKind],
    context: &SessionContext,
    formatter: &Formatter,
) -> Result<Vec<PathBuf>> {
    let written = sieve_export::export(
        context.session().current_session(),
        kinds,
        context.export_dir(),
    )?;

    println!("{}", formatter.export_result(&written));

    Ok(written)
}
