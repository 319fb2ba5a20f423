use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field name → submitted value, after string coercion.
pub type FieldData = BTreeMap<String, String>;

/// Inbound fill request.
///
/// The JSON body is the field-data map itself, with two reserved keys
/// pulled out: `template_path` overrides the configured template key, and
/// `visibility_map` drives the visibility stage. Everything else is
/// treated as a field name → value pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FillRequest {
    /// Template object key; falls back to the configured default
    pub template_path: Option<String>,

    /// Field name → shown/hidden
    pub visibility_map: Option<HashMap<String, bool>>,

    /// All remaining body keys: the field data
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl FillRequest {
    /// The submitted values in their string form.
    ///
    /// Strings pass through unchanged, numbers and booleans use their
    /// display form, arrays and objects their compact JSON encoding, and
    /// nulls are dropped as if the key were absent.
    pub fn field_data(&self) -> FieldData {
        self.fields
            .iter()
            .filter_map(|(key, value)| coerce(value).map(|s| (key.clone(), s)))
            .collect()
    }
}

fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Outbound success body: a time-limited download link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keys_are_not_field_data() {
        let request: FillRequest = serde_json::from_str(
            r#"{
                "template_path": "input/custom.pdf",
                "visibility_map": {"stamp": false},
                "name": "Alice"
            }"#,
        )
        .expect("request should parse");

        assert_eq!(request.template_path.as_deref(), Some("input/custom.pdf"));
        assert_eq!(
            request.visibility_map.as_ref().and_then(|m| m.get("stamp")),
            Some(&false)
        );

        let data = request.field_data();
        assert_eq!(data.get("name").map(String::as_str), Some("Alice"));
        assert!(!data.contains_key("template_path"));
        assert!(!data.contains_key("visibility_map"));
    }

    #[test]
    fn test_value_coercion() {
        let request: FillRequest = serde_json::from_str(
            r#"{
                "name": "Alice",
                "age": 42,
                "ratio": 0.5,
                "member": true,
                "note": null,
                "tags": ["a", "b"]
            }"#,
        )
        .expect("request should parse");

        let data = request.field_data();
        assert_eq!(data.get("name").map(String::as_str), Some("Alice"));
        assert_eq!(data.get("age").map(String::as_str), Some("42"));
        assert_eq!(data.get("ratio").map(String::as_str), Some("0.5"));
        assert_eq!(data.get("member").map(String::as_str), Some("true"));
        assert_eq!(data.get("tags").map(String::as_str), Some(r#"["a","b"]"#));
        assert!(!data.contains_key("note"));
    }

    #[test]
    fn test_empty_body() {
        let request: FillRequest = serde_json::from_str("{}").expect("empty body should parse");
        assert!(request.template_path.is_none());
        assert!(request.visibility_map.is_none());
        assert!(request.field_data().is_empty());
    }
}
