//! Extensions for mapping foreign errors into `MetadataResult` concisely.
//!
//! Decoding touches several error types (I/O, `serde_json`, sections); all of them
//! surface to callers as [`MetadataError::InvalidMetadata`].
//!
//! # Examples
//!
//! ```
//! use mcmeta_json::{MetadataResult, MetadataResultExt};
//!
//! fn decode(text: &str) -> MetadataResult<serde_json::Value> {
//!     serde_json::from_str(text).invalid_metadata("pack.png.moremcmeta")
//! }
//!
//! assert!(decode("{").is_err());
//! ```

use std::error::Error;

use crate::MetadataResult;
use crate::error::invalid_metadata;

#[cfg(doc)]
use crate::MetadataError;

/// Maps any `Result<T, E>` whose error can be boxed into an
/// [`MetadataError::InvalidMetadata`] for a named resource.
pub trait MetadataResultExt<T> {
    /// Convert the error into [`MetadataError::InvalidMetadata`].
    ///
    /// # Errors
    ///
    /// Returns the wrapped error when `self` is `Err`.
    fn invalid_metadata(self, source_name: &str) -> MetadataResult<T>;
}

impl<T, E> MetadataResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    fn invalid_metadata(self, source_name: &str) -> MetadataResult<T> {
        self.map_err(|err| invalid_metadata(source_name, err))
    }
}
