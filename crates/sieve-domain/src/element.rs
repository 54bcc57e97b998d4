//! Element module - the canonical unit of extracted content

use std::collections::BTreeMap;
use std::fmt;

/// Canonical element type tag
///
/// Every element carries exactly one of these tags. Native type indicators
/// that are not recognised map to `Uncategorized`, which is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementType {
    /// Document or section title
    Title,
    /// Running prose
    Narrative,
    /// Bulleted or numbered list entry
    ListItem,
    /// Tabular content
    Table,
    /// Caption attached to an image or figure
    ImageCaption,
    /// Page header
    Header,
    /// Page footer
    Footer,
    /// Text that the extraction service could not classify further
    Text,
    /// Postal address
    Address,
    /// Email message body
    Email,
    /// Page break marker (usually empty text)
    PageBreak,
    /// Mathematical formula
    Formula,
    /// Source code snippet
    Code,
    /// Anything the lookup table does not know
    Uncategorized,
}

impl ElementType {
    /// All tags, in declaration order
    pub const ALL: [ElementType; 14] = [
        ElementType::Title,
        ElementType::Narrative,
        ElementType::ListItem,
        ElementType::Table,
        ElementType::ImageCaption,
        ElementType::Header,
        ElementType::Footer,
        ElementType::Text,
        ElementType::Address,
        ElementType::Email,
        ElementType::PageBreak,
        ElementType::Formula,
        ElementType::Code,
        ElementType::Uncategorized,
    ];

    /// Get the tag as it appears in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Title => "title",
            ElementType::Narrative => "narrative",
            ElementType::ListItem => "list_item",
            ElementType::Table => "table",
            ElementType::ImageCaption => "image_caption",
            ElementType::Header => "header",
            ElementType::Footer => "footer",
            ElementType::Text => "text",
            ElementType::Address => "address",
            ElementType::Email => "email",
            ElementType::PageBreak => "page_break",
            ElementType::Formula => "formula",
            ElementType::Code => "code",
            ElementType::Uncategorized => "uncategorized",
        }
    }

    /// Map a native type indicator to a canonical tag
    ///
    /// Matching ignores case, `_`, `-` and spaces. Unknown indicators map to
    /// `Uncategorized`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sieve_domain::ElementType;
    ///
    /// assert_eq!(ElementType::from_indicator("NarrativeText"), ElementType::Narrative);
    /// assert_eq!(ElementType::from_indicator("list-item"), ElementType::ListItem);
    /// assert_eq!(ElementType::from_indicator("Hologram"), ElementType::Uncategorized);
    /// ```
    pub fn from_indicator(indicator: &str) -> Self {
        let key: String = indicator
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "title" | "heading" => ElementType::Title,
            "narrative" | "narrativetext" | "paragraph" => ElementType::Narrative,
            "listitem" | "list" | "bullet" => ElementType::ListItem,
            "table" => ElementType::Table,
            "imagecaption" | "figurecaption" | "caption" | "image" => ElementType::ImageCaption,
            "header" => ElementType::Header,
            "footer" => ElementType::Footer,
            "text" => ElementType::Text,
            "address" => ElementType::Address,
            "email" | "emailaddress" => ElementType::Email,
            "pagebreak" => ElementType::PageBreak,
            "formula" => ElementType::Formula,
            "code" | "codesnippet" => ElementType::Code,
            _ => ElementType::Uncategorized,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque metadata value attached to an element
///
/// The core never inspects these beyond pass-through storage. `Bytes` and
/// non-finite floats are kept as-is here; exporters coerce them to strings.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    /// Explicit null
    Null,
    /// Boolean flag
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number, possibly non-finite
    Float(f64),
    /// UTF-8 string
    Text(String),
    /// Raw bytes with no agreed text form
    Bytes(Vec<u8>),
    /// Ordered list of values
    List(Vec<MetadataValue>),
    /// Nested mapping
    Map(BTreeMap<String, MetadataValue>),
}

impl MetadataValue {
    /// Whether every export format can represent this value without coercion
    pub fn is_portable(&self) -> bool {
        match self {
            MetadataValue::Float(f) => f.is_finite(),
            MetadataValue::Bytes(_) => false,
            MetadataValue::List(items) => items.iter().all(MetadataValue::is_portable),
            MetadataValue::Map(map) => map.values().all(MetadataValue::is_portable),
            _ => true,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::Text(s)
    }
}

impl From<i64> for MetadataValue {
    fn from(n: i64) -> Self {
        MetadataValue::Int(n)
    }
}

impl From<f64> for MetadataValue {
    fn from(n: f64) -> Self {
        MetadataValue::Float(n)
    }
}

impl From<bool> for MetadataValue {
    fn from(b: bool) -> Self {
        MetadataValue::Bool(b)
    }
}

/// Bounding-box data for layout-aware formats
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinates {
    /// Polygon corner points, in the order the extraction service gave them
    pub points: Vec<(f64, f64)>,

    /// Coordinate system name (e.g. "PixelSpace")
    pub system: Option<String>,

    /// Width of the page or image the points refer to
    pub layout_width: Option<f64>,

    /// Height of the page or image the points refer to
    pub layout_height: Option<f64>,
}

/// One normalized unit of extracted content
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Canonical type tag
    pub element_type: ElementType,

    /// Text content, copied verbatim; may be empty
    pub text: String,

    /// Format-dependent metadata, passed through untouched
    pub metadata: BTreeMap<String, MetadataValue>,

    /// Bounding box, when the source format has layout
    pub coordinates: Option<Coordinates>,

    /// Position of the originating raw item in the extraction output
    pub element_index: usize,
}

impl Element {
    /// Create an element with no metadata or coordinates
    pub fn new(element_type: ElementType, text: impl Into<String>, element_index: usize) -> Self {
        Self {
            element_type,
            text: text.into(),
            metadata: BTreeMap::new(),
            coordinates: None,
            element_index,
        }
    }

    /// Number of whitespace-delimited tokens in the text
    pub fn word_count(&self) -> usize {
        crate::count_words(&self.text)
    }
}
