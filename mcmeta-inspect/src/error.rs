//! Error types for `mcmeta-inspect`.

use camino::Utf8PathBuf;
use mcmeta_json::{MetadataError, ResourceLocation};
use thiserror::Error;

/// Errors surfaced by the `mcmeta-inspect` pipeline.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Reading or decoding metadata failed.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// Configuration layers could not be merged or extracted.
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found at {0}")]
    ConfigNotFound(Utf8PathBuf),

    /// A metadata file's resource location could not be derived.
    #[error("cannot derive a resource location from {0}; pass --location")]
    UnknownLocation(Utf8PathBuf),

    /// No registered plugin handles the metadata file's extension.
    #[error("no parser is registered for {0}")]
    NoParser(ResourceLocation),

    /// Filesystem failure.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed.
    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

impl From<figment::Error> for InspectError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}
