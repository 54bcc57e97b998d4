//! Text renderer - human-readable report grouped by file

use sieve_domain::{FileStatus, ProcessingSession};

const RULE_WIDTH: usize = 50;

/// Render the session as a plain-text report
///
/// Elements with empty text still get their `[TYPE]` line and a blank text
/// line so their position stays visible.
pub fn render(session: &ProcessingSession) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    for file in &session.files {
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("FILE: {}\n", file.filename));
        out.push_str(&format!("ELEMENTS: {}\n", file.element_count()));
        out.push_str(&format!("WORDS: {}\n", file.word_count()));
        if file.status != FileStatus::Success {
            out.push_str(&format!("STATUS: {}\n", file.status));
            if let Some(detail) = &file.error_detail {
                out.push_str(&format!("ERROR: {}\n", detail));
            }
        }
        out.push_str(&rule);
        out.push_str("\n\n");

        for element in &file.elements {
            out.push_str(&format!("[{}]\n", element.element_type.as_str().to_uppercase()));
            out.push_str(&element.text);
            out.push_str("\n\n");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sieve_domain::{Element, ElementType, ProcessedFile};

    #[test]
    fn test_report_layout() {
        let mut file = ProcessedFile::failed("/docs/memo.txt", 40, "unused");
        file.elements = vec![
            Element::new(ElementType::Title, "Memo", 0),
            Element::new(ElementType::PageBreak, "", 1),
            Element::new(ElementType::ListItem, "call the vendor", 2),
        ];
        file.raw_element_count = 3;
        file.status = FileStatus::Success;
        file.error_detail = None;

        let mut session = ProcessingSession::started_at(0);
        session.push(file);

        let rule = "=".repeat(50);
        let expected = format!(
            "\n{rule}\nFILE: memo.txt\nELEMENTS: 3\nWORDS: 4\n{rule}\n\n\
             [TITLE]\nMemo\n\n\
             [PAGE_BREAK]\n\n\n\
             [LIST_ITEM]\ncall the vendor\n\n"
        );
        assert_eq!(render(&session), expected);
    }

    #[test]
    fn test_failed_file_shows_status() {
        let mut session = ProcessingSession::started_at(0);
        session.push(ProcessedFile::failed("c.pdf", 0, "extraction failed: corrupt xref table"));

        let out = render(&session);
        assert!(out.contains("ELEMENTS: 0\nWORDS: 0\nSTATUS: failed\nERROR: extraction failed: corrupt xref table\n"));
    }
}
