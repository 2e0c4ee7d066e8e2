//! Error types produced while reading metadata.

mod constructors;
mod types;

pub use types::{MetadataError, MetadataResult};

pub(crate) use constructors::{invalid_metadata, io_error};
