//! Plain-text extraction for text-like formats
//!
//! Splits a file into blocks on blank lines and classifies each block with
//! light heuristics. Markdown goes through `pulldown-cmark` so fenced code
//! and tables keep their structure. Binary and layout formats (PDF, office
//! documents, images) are rejected; those need a dedicated backend in the
//! registry.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use sieve_domain::{count_words, ExtractionService, FileType, RawElement, ServiceError};
use std::path::Path;

/// Longest single line that can still be a title
const MAX_TITLE_CHARS: usize = 80;

/// Most words a title may have
const MAX_TITLE_WORDS: usize = 12;

/// Extraction service for `.txt`, `.md`, `.csv` and `.html`
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextService;

impl PlainTextService {
    /// Create the service
    pub fn new() -> Self {
        Self
    }

    /// Whether this service can read `file_type`
    pub fn supports(file_type: FileType) -> bool {
        matches!(
            file_type,
            FileType::Txt | FileType::Markdown | FileType::Csv | FileType::Html
        )
    }
}

impl ExtractionService for PlainTextService {
    fn name(&self) -> &str {
        "plain-text"
    }

    fn partition(&self, path: &Path, file_type: FileType) -> Result<Vec<RawElement>, ServiceError> {
        if !Self::supports(file_type) {
            return Err(ServiceError::new(format!(
                "no extraction backend for {}",
                file_type
            )));
        }

        let data = std::fs::read(path)
            .map_err(|e| ServiceError::new(format!("cannot read {}: {}", path.display(), e)))?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(partition_bytes(&data, file_type, &filename))
    }
}

/// Partition raw file content into raw elements
pub fn partition_bytes(data: &[u8], file_type: FileType, filename: &str) -> Vec<RawElement> {
    let items = match (file_type, std::str::from_utf8(data)) {
        (FileType::Markdown, Ok(text)) => markdown_elements(text),
        _ => block_elements(data, file_type),
    };

    items
        .into_iter()
        .map(|(block_idx, item)| {
            item.with_metadata("filename", filename)
                .with_metadata("file_type", file_type.extension())
                .with_metadata("page_number", 1i64)
                .with_metadata("block_index", block_idx as i64)
        })
        .collect()
}

/// Blank-line blocks, each tagged with its block index
fn block_elements(data: &[u8], file_type: FileType) -> Vec<(usize, RawElement)> {
    let mut elements = Vec::new();

    for (block_idx, block) in split_blocks(data).into_iter().enumerate() {
        let items = match std::str::from_utf8(&block) {
            Ok(text) => classify_block(text, file_type),
            // Let the normalizer decide what to do with undecodable text
            Err(_) => vec![RawElement::from_bytes(
                "UncategorizedText",
                block,
                Some("utf-8".to_string()),
            )],
        };

        elements.extend(items.into_iter().map(|item| (block_idx, item)));
    }

    elements
}

/// An element being collected from markdown events
struct OpenElement {
    category: &'static str,
    text: String,
    depth: usize,
}

/// Walk the CommonMark event stream and emit one element per leaf block.
///
/// Nested content (a paragraph inside a list item, cells inside a table) is
/// folded into the enclosing element. Block index counts top-level blocks,
/// so all items of one list share an index.
fn markdown_elements(text: &str) -> Vec<(usize, RawElement)> {
    let mut elements = Vec::new();
    let mut open: Option<OpenElement> = None;
    let mut depth = 0usize;
    let mut block_idx = 0usize;

    for event in Parser::new_ext(text, Options::ENABLE_TABLES) {
        match event {
            Event::Start(tag) => {
                depth += 1;

                // A nested list item ends the text of its parent item
                if matches!(tag, Tag::Item)
                    && open.as_ref().is_some_and(|o| o.category == "ListItem")
                {
                    flush(&mut open, &mut elements, block_idx);
                }

                if open.is_none() {
                    if let Some(category) = markdown_category(&tag) {
                        open = Some(OpenElement {
                            category,
                            text: String::new(),
                            depth,
                        });
                    }
                }
            }
            Event::End(tag_end) => {
                if let Some(element) = open.as_mut() {
                    match tag_end {
                        TagEnd::TableCell => element.text.push_str(", "),
                        TagEnd::TableHead | TagEnd::TableRow => {
                            let trimmed = element.text.trim_end_matches([',', ' ']).len();
                            element.text.truncate(trimmed);
                            element.text.push('\n');
                        }
                        _ => {}
                    }
                }

                if open.as_ref().is_some_and(|o| o.depth == depth) {
                    flush(&mut open, &mut elements, block_idx);
                }

                depth = depth.saturating_sub(1);
                if depth == 0 {
                    block_idx += 1;
                }
            }
            Event::Text(t) | Event::Code(t) => {
                if let Some(element) = open.as_mut() {
                    element.text.push_str(&t);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(element) = open.as_mut() {
                    element.text.push('\n');
                }
            }
            _ => {}
        }
    }

    flush(&mut open, &mut elements, block_idx);
    elements
}

fn flush(open: &mut Option<OpenElement>, elements: &mut Vec<(usize, RawElement)>, block_idx: usize) {
    if let Some(element) = open.take() {
        let text = element.text.trim();
        if !text.is_empty() {
            elements.push((block_idx, RawElement::new(element.category, text)));
        }
    }
}

fn markdown_category(tag: &Tag<'_>) -> Option<&'static str> {
    match tag {
        Tag::Heading { .. } => Some("Title"),
        Tag::Paragraph => Some("NarrativeText"),
        Tag::Item => Some("ListItem"),
        Tag::CodeBlock(_) => Some("CodeSnippet"),
        Tag::Table(_) => Some("Table"),
        _ => None,
    }
}

/// Split bytes into blocks separated by blank lines
fn split_blocks(data: &[u8]) -> Vec<Vec<u8>> {
    let mut blocks = Vec::new();
    let mut current: Vec<u8> = Vec::new();

    for line in data.split(|&b| b == b'\n') {
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        if line.iter().all(u8::is_ascii_whitespace) {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            current.push(b'\n');
        }
        current.extend_from_slice(line);
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Classify one decoded block into one or more raw elements
fn classify_block(block: &str, file_type: FileType) -> Vec<RawElement> {
    match file_type {
        FileType::Csv => vec![RawElement::new("Table", block)],
        FileType::Html => {
            let heading = is_html_heading(block);
            let text = strip_tags(block);
            let text = text.trim();
            if text.is_empty() {
                Vec::new()
            } else if heading {
                vec![RawElement::new("Title", text)]
            } else {
                classify_text(text)
            }
        }
        FileType::Markdown => markdown_elements(block)
            .into_iter()
            .map(|(_, item)| item)
            .collect(),
        _ => classify_text(block),
    }
}

fn classify_text(block: &str) -> Vec<RawElement> {
    let lines: Vec<&str> = block.lines().collect();

    if !lines.is_empty() && lines.iter().all(|line| list_item(line).is_some()) {
        return lines
            .iter()
            .filter_map(|line| list_item(line))
            .map(|item| RawElement::new("ListItem", item))
            .collect();
    }

    if lines.len() == 1 && looks_like_title(lines[0]) {
        return vec![RawElement::new("Title", lines[0].trim())];
    }

    vec![RawElement::new("NarrativeText", block)]
}

/// Strip a bullet or numbered-list marker
fn list_item(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();

    for marker in ["- ", "* ", "• "] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return Some(rest.trim());
        }
    }

    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &trimmed[digits..];
        if let Some(item) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return Some(item.trim());
        }
    }

    None
}

fn looks_like_title(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && trimmed.chars().count() <= MAX_TITLE_CHARS
        && count_words(trimmed) <= MAX_TITLE_WORDS
        && !trimmed.ends_with(['.', '!', '?', ',', ';', ':'])
        && trimmed.chars().any(char::is_alphabetic)
}

fn is_html_heading(block: &str) -> bool {
    let lower = block.trim_start().to_ascii_lowercase();
    let bytes = lower.as_bytes();
    bytes.len() > 3 && bytes[0] == b'<' && bytes[1] == b'h' && (b'1'..=b'6').contains(&bytes[2])
}

fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sieve_domain::{MetadataValue, RawText};
    use std::io::Write;

    fn categories(elements: &[RawElement]) -> Vec<&str> {
        elements
            .iter()
            .map(|e| e.category.as_deref().unwrap_or(""))
            .collect()
    }

    fn text(element: &RawElement) -> &str {
        match &element.text {
            RawText::Utf8(s) => s,
            other => panic!("expected utf-8 text, got {:?}", other),
        }
    }

    #[test]
    fn test_split_blocks() {
        let blocks = split_blocks(b"first line\nsecond line\r\n\r\n\n  \nthird\n");
        assert_eq!(blocks, vec![b"first line\nsecond line".to_vec(), b"third".to_vec()]);
        assert!(split_blocks(b"").is_empty());
    }

    #[test]
    fn test_plain_text_classification() {
        let data = b"Quarterly Report\n\nRevenue grew in every region this quarter.\nCosts were flat.\n\n- north\n- south\n\n1. first\n2. second";
        let elements = partition_bytes(data, FileType::Txt, "report.txt");

        assert_eq!(
            categories(&elements),
            vec!["Title", "NarrativeText", "ListItem", "ListItem", "ListItem", "ListItem"]
        );
        assert_eq!(text(&elements[2]), "north");
        assert_eq!(text(&elements[5]), "second");
    }

    #[test]
    fn test_sentence_is_not_a_title() {
        let elements = partition_bytes(b"This is a full sentence.", FileType::Txt, "a.txt");
        assert_eq!(categories(&elements), vec!["NarrativeText"]);
    }

    #[test]
    fn test_markdown_heading_splits_block() {
        let elements = partition_bytes(b"## Setup\nInstall the tool first.", FileType::Markdown, "README.md");
        assert_eq!(categories(&elements), vec!["Title", "NarrativeText"]);
        assert_eq!(text(&elements[0]), "Setup");
    }

    #[test]
    fn test_markdown_fenced_code_is_one_element() {
        let data = b"```bash\nmake\n\n# install the binary\nmake install\n```\n";
        let elements = partition_bytes(data, FileType::Markdown, "README.md");

        assert_eq!(categories(&elements), vec!["CodeSnippet"]);
        assert_eq!(text(&elements[0]), "make\n\n# install the binary\nmake install");
    }

    #[test]
    fn test_markdown_document_structure() {
        let data = b"# Guide\n\nRead this first.\n\n- one\n- two\n  - nested\n\n| name | qty |\n| --- | --- |\n| apple | 3 |\n\n    indented code\n";
        let elements = partition_bytes(data, FileType::Markdown, "guide.md");

        assert_eq!(
            categories(&elements),
            vec!["Title", "NarrativeText", "ListItem", "ListItem", "ListItem", "Table", "CodeSnippet"]
        );
        assert_eq!(text(&elements[0]), "Guide");
        assert_eq!(text(&elements[3]), "two");
        assert_eq!(text(&elements[4]), "nested");
        assert_eq!(text(&elements[5]), "name, qty\napple, 3");
        assert_eq!(text(&elements[6]), "indented code");

        // Items of one list share the block index
        assert_eq!(elements[2].metadata.get("block_index"), Some(&MetadataValue::Int(2)));
        assert_eq!(elements[4].metadata.get("block_index"), Some(&MetadataValue::Int(2)));
        assert_eq!(elements[5].metadata.get("block_index"), Some(&MetadataValue::Int(3)));
    }

    #[test]
    fn test_markdown_with_invalid_utf8_falls_back_to_blocks() {
        let data = b"## Setup\n\nbad \xff block\n\n- item";
        let elements = partition_bytes(data, FileType::Markdown, "broken.md");

        assert_eq!(elements.len(), 3);
        assert_eq!(categories(&elements)[0], "Title");
        assert!(matches!(elements[1].text, RawText::Bytes { .. }));
        assert_eq!(categories(&elements)[2], "ListItem");
    }

    #[test]
    fn test_csv_blocks_are_tables() {
        let elements = partition_bytes(b"name,qty\napple,3\npear,5", FileType::Csv, "stock.csv");
        assert_eq!(categories(&elements), vec!["Table"]);
        assert_eq!(text(&elements[0]), "name,qty\napple,3\npear,5");
    }

    #[test]
    fn test_html_tags_are_stripped() {
        let elements = partition_bytes(
            b"<h1>Welcome</h1>\n\n<p>Thanks for <b>visiting</b> our site today.</p>\n\n<div></div>",
            FileType::Html,
            "index.html",
        );
        assert_eq!(categories(&elements), vec!["Title", "NarrativeText"]);
        assert_eq!(text(&elements[0]), "Welcome");
        assert_eq!(text(&elements[1]), "Thanks for visiting our site today.");
    }

    #[test]
    fn test_invalid_utf8_block_is_passed_as_bytes() {
        let elements = partition_bytes(b"good block\n\nbad \xff block", FileType::Txt, "mixed.txt");
        assert_eq!(elements.len(), 2);
        assert!(matches!(elements[1].text, RawText::Bytes { .. }));
    }

    #[test]
    fn test_metadata_is_attached() {
        let elements = partition_bytes(b"One\n\nTwo", FileType::Txt, "n.txt");
        assert_eq!(elements[1].metadata.get("filename"), Some(&MetadataValue::from("n.txt")));
        assert_eq!(elements[1].metadata.get("block_index"), Some(&MetadataValue::Int(1)));
        assert_eq!(elements[1].metadata.get("page_number"), Some(&MetadataValue::Int(1)));
    }

    #[test]
    fn test_reads_file_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Title Line\n\nBody text goes here.").unwrap();

        let elements = PlainTextService::new()
            .partition(file.path(), FileType::Txt)
            .unwrap();
        assert_eq!(elements.len(), 2);
    }

    #[test]
    fn test_missing_file_is_a_service_error() {
        let result = PlainTextService::new().partition(Path::new("/nonexistent/x.txt"), FileType::Txt);
        assert!(result.unwrap_err().message().contains("cannot read"));
    }

    #[test]
    fn test_binary_formats_are_rejected() {
        let err = PlainTextService::new()
            .partition(Path::new("scan.pdf"), FileType::Pdf)
            .unwrap_err();
        assert_eq!(err.message(), "no extraction backend for pdf");
    }
}
