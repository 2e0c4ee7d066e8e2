//! Builders for section-shaped metadata documents.

use serde_json::{Map, Value, json};

/// Render a metadata document with one empty-bodied section per entry.
///
/// A `Some(layer)` adds an integer `layer` field to the section.
///
/// # Examples
///
/// ```
/// use mcmeta_json_test_helpers::json::sections;
///
/// let text = sections(&[("animation", Some(2)), ("gui", None)]);
/// assert_eq!(text, r#"{"animation":{"layer":2},"gui":{}}"#);
/// ```
#[must_use]
pub fn sections(entries: &[(&str, Option<i64>)]) -> String {
    let root: Map<String, Value> = entries
        .iter()
        .map(|(name, layer)| {
            let body = layer.map_or_else(|| json!({}), |value| json!({ "layer": value }));
            ((*name).to_owned(), body)
        })
        .collect();
    Value::Object(root).to_string()
}
