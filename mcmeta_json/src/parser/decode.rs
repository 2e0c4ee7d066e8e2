//! Decoding of a metadata byte stream into an ordered view.

use std::io::Read;

use serde_json::Value;

use crate::error::invalid_metadata;
use crate::order::order_sections;
use crate::{MetadataResult, MetadataResultExt, MetadataView};

/// Decode one metadata stream into its plugin-ordered view.
///
/// The stream is consumed and dropped before this function returns,
/// whether decoding succeeds or not. `source_name` only labels errors and
/// log records. Byte sequences that are not valid UTF-8 are replaced with
/// `U+FFFD` rather than rejected.
///
/// # Errors
///
/// Returns [`crate::MetadataError::InvalidMetadata`] when the stream cannot
/// be read, is not a single JSON object, or has a top-level
/// value that is not an object.
///
/// # Examples
///
/// ```
/// use mcmeta_json::decode_metadata;
///
/// let view = decode_metadata("demo", r#"{"b": {}, "a": {"layer": 1}}"#.as_bytes())?;
/// assert_eq!(view.keys().collect::<Vec<_>>(), ["b", "a"]);
/// assert!(decode_metadata("demo", "{".as_bytes()).is_err());
/// # Ok::<(), mcmeta_json::MetadataError>(())
/// ```
pub fn decode_metadata<R: Read>(source_name: &str, mut stream: R) -> MetadataResult<MetadataView> {
    let mut bytes = Vec::new();
    stream.read_to_end(&mut bytes).invalid_metadata(source_name)?;
    drop(stream);
    let text = String::from_utf8_lossy(&bytes);
    let value: Value = serde_json::from_str(&text).invalid_metadata(source_name)?;
    let Value::Object(root) = value else {
        return Err(invalid_metadata(
            source_name,
            "top-level value is not a JSON object",
        ));
    };
    let view = order_sections(root).invalid_metadata(source_name)?;
    tracing::debug!(
        source = source_name,
        sections = ?view.keys().collect::<Vec<_>>(),
        "ordered metadata sections"
    );
    Ok(view)
}
