//! Read-only, ordered projections over JSON objects.
//!
//! A [`MetadataView`] answers typed key lookups against a decoded JSON object
//! and iterates that object's direct keys in the order chosen by a
//! [`KeyOrder`], never in the document's own order.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

type KeyComparator = dyn Fn(&str, &str) -> Ordering + Send + Sync;

/// A shareable total order over key strings.
///
/// The comparator must be total over the keys it is used with: two distinct
/// keys must never compare [`Ordering::Equal`], otherwise their relative
/// position would depend on the sort rather than on the data.
#[derive(Clone)]
pub struct KeyOrder(Arc<KeyComparator>);

impl KeyOrder {
    /// Plain string ordering: byte-wise UTF-8, which is Unicode codepoint
    /// order. No locale collation is applied.
    #[must_use]
    pub fn lexicographic() -> Self {
        Self(Arc::new(|first: &str, second: &str| first.cmp(second)))
    }

    /// Wrap an arbitrary comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcmeta_json::KeyOrder;
    /// use std::cmp::Ordering;
    ///
    /// let reversed = KeyOrder::from_fn(|a, b| b.cmp(a));
    /// assert_eq!(reversed.compare("a", "b"), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn from_fn<F>(compare: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    {
        Self(Arc::new(compare))
    }

    /// Compare two keys.
    #[must_use]
    pub fn compare(&self, first: &str, second: &str) -> Ordering {
        (self.0)(first, second)
    }
}

impl Default for KeyOrder {
    fn default() -> Self {
        Self::lexicographic()
    }
}

impl fmt::Debug for KeyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeyOrder").field(&"<comparator>").finish()
    }
}

/// Ordered, immutable view over a JSON object.
///
/// Cloning is cheap: the object and the computed key order are shared.
#[derive(Clone, Debug)]
pub struct MetadataView {
    object: Arc<Map<String, Value>>,
    keys: Arc<[String]>,
}

impl MetadataView {
    /// Build a view over `object`, ordering its keys with `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcmeta_json::{KeyOrder, MetadataView};
    /// use serde_json::json;
    ///
    /// let serde_json::Value::Object(object) = json!({"b": 1, "a": 2}) else {
    ///     unreachable!()
    /// };
    /// let view = MetadataView::new(object, &KeyOrder::lexicographic());
    /// assert_eq!(view.keys().collect::<Vec<_>>(), ["a", "b"]);
    /// assert_eq!(view.integer_value("b"), Some(1));
    /// ```
    #[must_use]
    pub fn new(object: Map<String, Value>, order: &KeyOrder) -> Self {
        Self::from_shared(Arc::new(object), order)
    }

    /// Build a view over an already shared object.
    #[must_use]
    pub fn from_shared(object: Arc<Map<String, Value>>, order: &KeyOrder) -> Self {
        let mut keys: Vec<String> = object.keys().cloned().collect();
        keys.sort_by(|first, second| order.compare(first, second));
        Self {
            object,
            keys: keys.into(),
        }
    }

    /// A view over the same object with its keys re-ordered by `order`.
    ///
    /// The underlying object is shared, not copied.
    #[must_use]
    pub fn with_order(&self, order: &KeyOrder) -> Self {
        Self::from_shared(Arc::clone(&self.object), order)
    }

    /// The object's direct keys in this view's order.
    ///
    /// Every call yields the same sequence.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    /// Number of direct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the object has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` if `key` is present, whatever its value.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.object.contains_key(key)
    }

    /// Raw value stored at `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.object.get(key)
    }

    /// The value at `key` when it is a JSON integer within `i32` range.
    ///
    /// Strings holding digits, fractional or exponent-form numbers (`3.0`
    /// included) and booleans are not coerced.
    #[must_use]
    pub fn integer_value(&self, key: &str) -> Option<i32> {
        self.long_value(key)
            .and_then(|number| i32::try_from(number).ok())
    }

    /// The integer at `key`, or `default` when [`Self::integer_value`] is
    /// absent.
    #[must_use]
    pub fn integer_value_or(&self, key: &str, default: i32) -> i32 {
        self.integer_value(key).unwrap_or(default)
    }

    /// The value at `key` when it is a JSON integer within `i64` range.
    #[must_use]
    pub fn long_value(&self, key: &str) -> Option<i64> {
        self.value(key).and_then(Value::as_i64)
    }

    /// The value at `key` when it is any JSON number.
    #[must_use]
    pub fn double_value(&self, key: &str) -> Option<f64> {
        self.value(key).and_then(Value::as_f64)
    }

    /// The value at `key` when it is a JSON boolean.
    #[must_use]
    pub fn boolean_value(&self, key: &str) -> Option<bool> {
        self.value(key).and_then(Value::as_bool)
    }

    /// The value at `key` when it is a JSON string.
    #[must_use]
    pub fn string_value(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(Value::as_str)
    }

    /// A lexicographically ordered view over the object stored at `key`.
    ///
    /// Returns `None` when the key is missing or its value is not an object;
    /// arrays are not objects.
    #[must_use]
    pub fn sub_view(&self, key: &str) -> Option<Self> {
        self.sub_view_with(key, &KeyOrder::lexicographic())
    }

    /// Like [`Self::sub_view`], ordering the nested keys with `order`.
    #[must_use]
    pub fn sub_view_with(&self, key: &str, order: &KeyOrder) -> Option<Self> {
        self.value(key)
            .and_then(Value::as_object)
            .map(|nested| Self::new(nested.clone(), order))
    }

    /// The underlying JSON object.
    #[must_use]
    pub fn as_object(&self) -> &Map<String, Value> {
        &self.object
    }
}
