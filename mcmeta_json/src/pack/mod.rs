//! Resource packs that metadata can be read from.
//!
//! A missing resource is an ordinary `Ok(None)`; only failures to reach a
//! resource that does exist are errors.

mod directory;
mod memory;

use std::io::Read;

use crate::{MetadataResult, ResourceLocation, RootResourceName};

pub use directory::DirectoryPack;
pub use memory::InMemoryPack;

/// Byte stream for one resource. Dropping it closes the resource.
pub type ResourceStream<'a> = Box<dyn Read + Send + 'a>;

/// Source of resource byte streams.
pub trait ResourcePack {
    /// Human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Open a resource stored at the pack root.
    ///
    /// # Errors
    ///
    /// Returns an error when the resource exists but cannot be opened.
    fn root_resource(
        &self,
        name: &RootResourceName,
    ) -> MetadataResult<Option<ResourceStream<'_>>>;

    /// Open a namespaced resource.
    ///
    /// # Errors
    ///
    /// Returns an error when the resource exists but cannot be opened.
    fn resource(
        &self,
        location: &ResourceLocation,
    ) -> MetadataResult<Option<ResourceStream<'_>>>;

    /// Every namespaced resource in the pack, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error when the pack's contents cannot be listed.
    fn resource_locations(&self) -> MetadataResult<Vec<ResourceLocation>>;
}
