//! Primary error enum for metadata reading flows.

use std::error::Error;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while reading metadata.
///
/// Missing keys and type mismatches inside a view are not errors; the view
/// API reports them as `None`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MetadataError {
    /// The stream did not hold a JSON object whose sections are objects.
    #[error("metadata '{source_name}' is invalid: {source}")]
    InvalidMetadata {
        /// Name of the resource the stream was read from.
        source_name: String,
        /// Underlying decode failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// A resource location or root resource name is malformed.
    #[error("invalid resource location '{location}': {message}")]
    InvalidLocation {
        /// The offending location text.
        location: String,
        /// Human-readable explanation of the problem.
        message: String,
    },

    /// Filesystem failure other than a missing resource.
    #[error("I/O error at '{path}': {source}")]
    Io {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A plugin descriptor is unusable.
    #[error("plugin '{id}' is invalid: {message}")]
    InvalidPlugin {
        /// Identifier of the rejected plugin.
        id: String,
        /// Human-readable explanation of the problem.
        message: String,
    },

    /// A plugin was registered twice under the same extension or id.
    #[error("a plugin is already registered for '{key}'")]
    DuplicatePlugin {
        /// Extension or id that collided.
        key: String,
    },
}

/// Result alias used throughout the crate.
pub type MetadataResult<T> = Result<T, MetadataError>;

impl MetadataError {
    /// Returns `true` when this is an [`MetadataError::InvalidMetadata`].
    #[must_use]
    pub const fn is_invalid_metadata(&self) -> bool {
        matches!(self, Self::InvalidMetadata { .. })
    }
}
