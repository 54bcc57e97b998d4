//! Clear command implementation.

use crate::context::SessionContext;
use crate::output::Formatter;

/// Execute the clear command.
pub fn execute_clear(context: &mut SessionContext, formatter: &Formatter) {
    context.clear();
    println!("{}", formatter.success("Session cleared. You can start fresh!"));
}
