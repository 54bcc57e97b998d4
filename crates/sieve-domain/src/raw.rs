//! Raw items as returned by an extraction service
//!
//! These are deliberately loose: the normalizer decides what is usable.

use crate::element::{Coordinates, MetadataValue};
use std::collections::BTreeMap;

/// Text payload of a raw item
#[derive(Debug, Clone, PartialEq)]
pub enum RawText {
    /// No text (e.g. an image with no OCR output)
    Absent,
    /// Already-decoded text
    Utf8(String),
    /// Undecoded bytes, with the encoding the service believes they use
    Bytes {
        /// Raw payload
        data: Vec<u8>,
        /// Declared encoding label, if any
        encoding: Option<String>,
    },
}

/// One raw content item from an extraction service
#[derive(Debug, Clone, PartialEq)]
pub struct RawElement {
    /// Native type indicator (e.g. "NarrativeText"); `None` when the service
    /// could not say what the item is
    pub category: Option<String>,

    /// Text payload
    pub text: RawText,

    /// Format-dependent metadata
    pub metadata: BTreeMap<String, MetadataValue>,

    /// Bounding box, if the format has layout
    pub coordinates: Option<Coordinates>,
}

impl RawElement {
    /// Create a raw item with decoded text
    pub fn new(category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            text: RawText::Utf8(text.into()),
            metadata: BTreeMap::new(),
            coordinates: None,
        }
    }

    /// Create a raw item carrying undecoded bytes
    pub fn from_bytes(category: impl Into<String>, data: Vec<u8>, encoding: Option<String>) -> Self {
        Self {
            category: Some(category.into()),
            text: RawText::Bytes { data, encoding },
            metadata: BTreeMap::new(),
            coordinates: None,
        }
    }

    /// Add a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Attach coordinates
    pub fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}
