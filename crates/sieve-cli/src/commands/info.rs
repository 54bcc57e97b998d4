//! Static help, demo and format listings. None of these touch the session.

use crate::output::Formatter;
use sieve_domain::FileType;
use sieve_extractor::PlainTextService;

/// Supported formats, one line per format.
pub fn formats_text() -> String {
    FileType::ALL
        .iter()
        .map(|file_type| {
            let backend = if PlainTextService::supports(*file_type) {
                "built-in"
            } else if file_type.is_image() {
                "needs OCR backend"
            } else {
                "needs extraction backend"
            };
            format!("  .{:<6} {}", file_type.extension(), backend)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the help text.
pub fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  process <path> [<path> ...]   - Process files, in order");
    println!("  show, preview, view           - Preview extracted content");
    println!("  export [json|csv|text]        - Write results (all formats by default)");
    println!("  clear, reset, new             - Discard all processed data");
    println!("  demo, example, sample         - Show a sample workflow");
    println!("  help, ?, info                 - Show this help");
    println!("  exit, quit, q                 - Exit REPL");
    println!();
    println!("{}", formatter.info("Supported formats:"));
    println!("{}", formats_text());
    println!();
    println!("  .jpeg is accepted as .jpg. Results stay in memory until exported.");
    println!();
}

/// Print the supported-format registry.
pub fn print_formats(formatter: &Formatter) {
    println!("{}", formatter.info("Supported formats:"));
    println!("{}", formats_text());
}

/// Print the sample workflow.
pub fn print_demo(formatter: &Formatter) {
    println!("{}", formatter.info("Demo workflow"));
    println!();
    println!("  1. Process a file:   process /path/to/notes.md /path/to/report.txt");
    println!("  2. View results:     show");
    println!("  3. Export the data:  export          (or: export json)");
    println!("  4. Start over:       clear");
    println!();
    println!("  Text, Markdown, HTML and CSV files work out of the box.");
    println!("  Unreadable or unsupported files are reported and skipped;");
    println!("  the rest of the batch still runs.");
    println!();
}
