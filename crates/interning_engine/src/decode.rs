use interning_core::Internship;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("posting list is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Decodes the upstream posting list: a JSON array of objects with
/// `company`, `description`, `link` and `locations`. Order is preserved and
/// missing fields become empty values.
pub fn decode_internships(bytes: &[u8]) -> Result<Vec<Internship>, DecodeError> {
    // A UTF-8 BOM is common on hand-edited files.
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    Ok(serde_json::from_slice(bytes)?)
}
