//! Element normalizer - raw extraction items to canonical elements

use crate::error::NormalizationError;
use sieve_domain::{Element, ElementType, RawElement, RawText};

/// Convert one raw item into an `Element`
///
/// Fails only when the item's type indicator is missing or its text cannot be
/// decoded. Unknown indicators, empty text, odd metadata and absent
/// coordinates are all valid.
pub fn normalize(raw: RawElement, element_index: usize) -> Result<Element, NormalizationError> {
    let element_type = match raw.category.as_deref().map(str::trim) {
        Some(indicator) if !indicator.is_empty() => ElementType::from_indicator(indicator),
        _ => return Err(NormalizationError::MissingCategory),
    };

    let text = decode_text(raw.text)?;

    Ok(Element {
        element_type,
        text,
        metadata: raw.metadata,
        coordinates: raw.coordinates,
        element_index,
    })
}

/// Decode a raw text payload, copying decoded text verbatim
fn decode_text(text: RawText) -> Result<String, NormalizationError> {
    match text {
        RawText::Absent => Ok(String::new()),
        RawText::Utf8(s) => Ok(s),
        RawText::Bytes { data, encoding } => {
            let label = encoding
                .as_deref()
                .unwrap_or("utf-8")
                .trim()
                .to_ascii_lowercase();

            match label.as_str() {
                "utf-8" | "utf8" => String::from_utf8(data).map_err(|e| NormalizationError::Encoding {
                    encoding: "utf-8".to_string(),
                    reason: e.utf8_error().to_string(),
                }),
                "ascii" | "us-ascii" => {
                    if let Some(pos) = data.iter().position(|b| !b.is_ascii()) {
                        return Err(NormalizationError::Encoding {
                            encoding: "ascii".to_string(),
                            reason: format!("non-ascii byte 0x{:02x} at offset {}", data[pos], pos),
                        });
                    }
                    // All bytes are ASCII, so this is a lossless mapping
                    Ok(data.iter().map(|&b| b as char).collect())
                }
                // Every byte is a valid Latin-1 code point
                "latin-1" | "latin1" | "iso-8859-1" => Ok(data.iter().map(|&b| b as char).collect()),
                other => Err(NormalizationError::UnsupportedEncoding(other.to_string())),
            }
        }
    }
}
