//! JSON renderer - one nested record per file

use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Number, Value};
use sieve_domain::{Coordinates, Element, MetadataValue, ProcessedFile, ProcessingSession};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Serialize)]
struct FileRecord<'a> {
    filename: &'a str,
    file_type: &'a str,
    file_size: u64,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_detail: Option<&'a str>,
    element_count: usize,
    word_count: usize,
    skipped_elements: usize,
    elements: Vec<ElementRecord<'a>>,
}

#[derive(Serialize)]
struct ElementRecord<'a> {
    #[serde(rename = "type")]
    element_type: &'static str,
    text: &'a str,
    metadata: BTreeMap<&'a str, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinates: Option<CoordinatesRecord<'a>>,
    element_index: usize,
}

#[derive(Serialize)]
struct CoordinatesRecord<'a> {
    points: Vec<[Value; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout_width: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout_height: Option<Value>,
}

/// Render the session as a pretty-printed JSON array
pub fn render(session: &ProcessingSession) -> Result<String> {
    let records: Vec<FileRecord<'_>> = session.files.iter().map(file_record).collect();
    let mut out = serde_json::to_string_pretty(&records)?;
    out.push('\n');
    Ok(out)
}

fn file_record(file: &ProcessedFile) -> FileRecord<'_> {
    FileRecord {
        filename: &file.filename,
        file_type: &file.file_type,
        file_size: file.file_size,
        status: file.status.as_str(),
        error_detail: file.error_detail.as_deref(),
        element_count: file.element_count(),
        word_count: file.word_count(),
        skipped_elements: file.skipped_count(),
        elements: file.elements.iter().map(element_record).collect(),
    }
}

fn element_record(element: &Element) -> ElementRecord<'_> {
    ElementRecord {
        element_type: element.element_type.as_str(),
        text: &element.text,
        metadata: element
            .metadata
            .iter()
            .map(|(key, value)| {
                if !value.is_portable() {
                    debug!("Coercing metadata '{}' of element {} to a string", key, element.element_index);
                }
                (key.as_str(), to_json(value))
            })
            .collect(),
        coordinates: element.coordinates.as_ref().map(coordinates_record),
        element_index: element.element_index,
    }
}

fn coordinates_record(coordinates: &Coordinates) -> CoordinatesRecord<'_> {
    CoordinatesRecord {
        points: coordinates
            .points
            .iter()
            .map(|&(x, y)| [float(x), float(y)])
            .collect(),
        system: coordinates.system.as_deref(),
        layout_width: coordinates.layout_width.map(float),
        layout_height: coordinates.layout_height.map(float),
    }
}

/// Convert a metadata value, coercing what JSON cannot hold to strings
pub(crate) fn to_json(value: &MetadataValue) -> Value {
    match value {
        MetadataValue::Null => Value::Null,
        MetadataValue::Bool(b) => Value::Bool(*b),
        MetadataValue::Int(i) => Value::Number((*i).into()),
        MetadataValue::Float(f) => float(*f),
        MetadataValue::Text(s) => Value::String(s.clone()),
        MetadataValue::Bytes(data) => Value::String(String::from_utf8_lossy(data).into_owned()),
        MetadataValue::List(items) => Value::Array(items.iter().map(to_json).collect()),
        MetadataValue::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), to_json(value)))
                .collect::<Map<String, Value>>(),
        ),
    }
}

fn float(f: f64) -> Value {
    match Number::from_f64(f) {
        Some(n) => Value::Number(n),
        None if f.is_nan() => Value::String("NaN".to_string()),
        None if f > 0.0 => Value::String("inf".to_string()),
        None => Value::String("-inf".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sieve_domain::{ElementType, FileStatus};

    fn session() -> ProcessingSession {
        let mut element = Element::new(ElementType::Title, "Quarterly Report", 0);
        element.metadata.insert("page_number".to_string(), MetadataValue::Int(1));
        element.coordinates = Some(Coordinates {
            points: vec![(0.0, 0.0), (10.5, 20.0)],
            system: Some("PixelSpace".to_string()),
            layout_width: Some(612.0),
            layout_height: None,
        });

        let mut file = ProcessedFile::failed("/tmp/report.pdf", 2048, "unused");
        file.status = FileStatus::Success;
        file.error_detail = None;
        file.raw_element_count = 1;
        file.elements.push(element);

        let mut session = ProcessingSession::started_at(0);
        session.push(file);
        session.push(ProcessedFile::failed("/tmp/b.unknownext", 0, "unsupported format"));
        session
    }

    #[test]
    fn test_file_records() {
        let out = render(&session()).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        let files = parsed.as_array().unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0]["filename"], "report.pdf");
        assert_eq!(files[0]["file_type"], ".pdf");
        assert_eq!(files[0]["word_count"], 2);
        assert_eq!(files[0]["status"], "success");
        assert!(files[0].get("error_detail").is_none());

        let element = &files[0]["elements"][0];
        assert_eq!(element["type"], "title");
        assert_eq!(element["text"], "Quarterly Report");
        assert_eq!(element["metadata"]["page_number"], 1);
        assert_eq!(element["coordinates"]["system"], "PixelSpace");
        assert_eq!(element["coordinates"]["points"][1][0], 10.5);

        assert_eq!(files[1]["status"], "failed");
        assert_eq!(files[1]["error_detail"], "unsupported format");
        assert_eq!(files[1]["elements"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_unportable_metadata_is_coerced() {
        assert_eq!(
            to_json(&MetadataValue::Bytes(b"caf\xc3\xa9 \xff".to_vec())),
            Value::String("café \u{fffd}".to_string())
        );
        assert_eq!(to_json(&MetadataValue::Float(f64::NAN)), Value::String("NaN".to_string()));
        assert_eq!(
            to_json(&MetadataValue::Float(f64::NEG_INFINITY)),
            Value::String("-inf".to_string())
        );

        let nested = MetadataValue::List(vec![
            MetadataValue::Float(f64::INFINITY),
            MetadataValue::Null,
            MetadataValue::from("ok"),
        ]);
        assert_eq!(to_json(&nested), serde_json::json!(["inf", null, "ok"]));
    }

    #[test]
    fn test_render_is_deterministic() {
        let session = session();
        assert_eq!(render(&session).unwrap(), render(&session).unwrap());
    }
}
