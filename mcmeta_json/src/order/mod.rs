//! Plugin application order for the top-level sections of a metadata file.
//!
//! Sections are ordered by their integer [`LAYER_KEY`] field, lowest first,
//! and then by name. Layers are read through a lexicographically ordered
//! view of the same document, so they follow exactly the integer rules of
//! [`MetadataView::integer_value`]. The resulting index is immutable and the
//! final view is built from it in a second pass:
//!
//! 1. unsorted view over the root object (plain key order);
//! 2. [`SectionOrder`] index of `section -> layer`, read through that view;
//! 3. the final view, ordered by [`SectionOrder::compare`].

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::view::{KeyOrder, MetadataView};

/// Section field holding the ordering priority.
pub const LAYER_KEY: &str = "layer";

/// Layer assumed for sections without an integer [`LAYER_KEY`].
pub const DEFAULT_LAYER: i32 = 0;

/// A top-level entry could not be treated as a section.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SectionError {
    /// The section's value is not a JSON object.
    #[error("section '{section}' is not a JSON object")]
    NotAnObject {
        /// Name of the offending section.
        section: String,
    },
}

/// Priority index over the sections of one metadata document.
#[derive(Clone, Debug)]
pub struct SectionOrder {
    layers: Arc<BTreeMap<String, i32>>,
}

impl SectionOrder {
    /// Read every section's layer through `unsorted`.
    ///
    /// A missing or non-integer layer counts as [`DEFAULT_LAYER`].
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::NotAnObject`] for the first section (in key
    /// order) whose value is not an object.
    pub fn from_root(unsorted: &MetadataView) -> Result<Self, SectionError> {
        let layers = unsorted
            .keys()
            .map(|section| {
                unsorted
                    .sub_view(section)
                    .map(|view| (section.to_owned(), section_layer(&view)))
                    .ok_or_else(|| SectionError::NotAnObject {
                        section: section.to_owned(),
                    })
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self {
            layers: Arc::new(layers),
        })
    }

    /// The layer recorded for `section`, if it belongs to this document.
    #[must_use]
    pub fn layer(&self, section: &str) -> Option<i32> {
        self.layers.get(section).copied()
    }

    /// Compare two sections: lower layer first, then by name.
    ///
    /// Distinct sections never compare equal.
    ///
    /// # Panics
    ///
    /// Panics if either name is not a section of the indexed document. Both
    /// operands always come from that document's own keys, so this signals
    /// mis-wired ordering rather than bad input.
    #[must_use]
    #[track_caller]
    pub fn compare(&self, first: &str, second: &str) -> Ordering {
        self.known_layer(first)
            .cmp(&self.known_layer(second))
            .then_with(|| first.cmp(second))
    }

    /// Convert the index into a [`KeyOrder`] for building the final view.
    #[must_use]
    pub fn into_key_order(self) -> KeyOrder {
        KeyOrder::from_fn(move |first, second| self.compare(first, second))
    }

    #[track_caller]
    fn known_layer(&self, section: &str) -> i32 {
        self.layer(section).unwrap_or_else(|| {
            panic!("section '{section}' is not part of the metadata being ordered")
        })
    }
}

/// The layer of one section view, defaulting when absent.
#[must_use]
pub fn section_layer(section: &MetadataView) -> i32 {
    section.integer_value_or(LAYER_KEY, DEFAULT_LAYER)
}

/// Build the plugin-ordered view over a root metadata object.
///
/// # Errors
///
/// Returns [`SectionError`] when a top-level value is not an object.
///
/// # Examples
///
/// ```
/// use mcmeta_json::order_sections;
/// use serde_json::json;
///
/// let serde_json::Value::Object(root) = json!({
///     "animation": {"layer": 2},
///     "gui": {"layer": -1},
///     "texture": {}
/// }) else { unreachable!() };
/// let view = order_sections(root)?;
/// assert_eq!(view.keys().collect::<Vec<_>>(), ["gui", "texture", "animation"]);
/// # Ok::<(), mcmeta_json::SectionError>(())
/// ```
pub fn order_sections(root: Map<String, Value>) -> Result<MetadataView, SectionError> {
    let unsorted = MetadataView::new(root, &KeyOrder::lexicographic());
    let order = SectionOrder::from_root(&unsorted)?;
    Ok(unsorted.with_order(&order.into_key_order()))
}
