//! Constructors shared by the decoding and pack helpers.

use std::error::Error;

use camino::Utf8Path;

use super::MetadataError;

/// Construct a [`MetadataError::InvalidMetadata`] for a named resource.
pub(crate) fn invalid_metadata(
    source_name: impl Into<String>,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> MetadataError {
    MetadataError::InvalidMetadata {
        source_name: source_name.into(),
        source: err.into(),
    }
}

pub(crate) fn io_error(path: &Utf8Path, source: std::io::Error) -> MetadataError {
    MetadataError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl MetadataError {
    /// Construct an [`MetadataError::InvalidLocation`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mcmeta_json::MetadataError;
    /// let err = MetadataError::invalid_location("Bad:Path", "uppercase namespace");
    /// assert!(matches!(err, MetadataError::InvalidLocation { .. }));
    /// ```
    #[must_use]
    pub fn invalid_location(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLocation {
            location: location.into(),
            message: message.into(),
        }
    }
}
