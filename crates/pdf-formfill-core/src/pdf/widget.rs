//! Widget annotation attributes.
//!
//! Form fields live on pages as `Widget` annotations. Two separate flag
//! words apply: the field flag word (`/Ff`) carries field behavior such as
//! read-only, and the annotation flag word (`/F`) carries display behavior
//! such as hidden.

use lopdf::Dictionary;

/// Field flag word (`/Ff`): bit 0 marks the field read-only.
pub const FIELD_READ_ONLY: i64 = 1;

/// Annotation flag word (`/F`): bit 1 marks the annotation hidden.
pub const ANNOT_HIDDEN: i64 = 1 << 1;

/// Whether an annotation dictionary is a `Widget` annotation.
pub fn is_widget(dict: &Dictionary) -> bool {
    dict.get(b"Subtype")
        .and_then(|obj| obj.as_name())
        .map(|name| name == b"Widget")
        .unwrap_or(false)
}

/// The widget's field name (`/T`), if present and non-empty.
///
/// Widgets without a name are not form fields and are never mutated.
pub fn field_name(dict: &Dictionary) -> Option<String> {
    let bytes = dict.get(b"T").ok()?.as_str().ok()?;
    let name = decode_text(bytes);
    if name.is_empty() { None } else { Some(name) }
}

/// The field flag word (`/Ff`), with absent treated as 0.
pub fn field_flags(dict: &Dictionary) -> i64 {
    dict.get(b"Ff").and_then(|obj| obj.as_i64()).unwrap_or(0)
}

/// The annotation flag word (`/F`), with absent treated as 0.
pub fn annotation_flags(dict: &Dictionary) -> i64 {
    dict.get(b"F").and_then(|obj| obj.as_i64()).unwrap_or(0)
}

/// Decode a PDF text string.
///
/// Text strings are either UTF-16BE with a leading byte-order mark or a
/// single-byte encoding; the latter is decoded lossily as UTF-8, which
/// covers the ASCII field names real-world forms use.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
