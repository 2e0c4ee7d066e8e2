//! Pack backed by in-memory byte buffers.

use std::collections::BTreeMap;
use std::io::Cursor;
use std::sync::Arc;

use super::{ResourcePack, ResourceStream};
use crate::{MetadataResult, ResourceLocation, RootResourceName};

/// A pack whose resources live in memory.
///
/// # Examples
///
/// ```
/// use mcmeta_json::{InMemoryPack, ResourcePack, RootResourceName};
///
/// let name = RootResourceName::new("pack.png.moremcmeta")?;
/// let pack = InMemoryPack::new("demo").with_root_resource(name.clone(), "{}");
/// assert!(pack.root_resource(&name)?.is_some());
/// # Ok::<(), mcmeta_json::MetadataError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryPack {
    name: String,
    root: BTreeMap<RootResourceName, Arc<[u8]>>,
    assets: BTreeMap<ResourceLocation, Arc<[u8]>>,
}

impl InMemoryPack {
    /// An empty pack.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add or replace a root resource.
    #[must_use]
    pub fn with_root_resource(mut self, name: RootResourceName, bytes: impl AsRef<[u8]>) -> Self {
        self.root.insert(name, Arc::from(bytes.as_ref()));
        self
    }

    /// Add or replace a namespaced resource.
    #[must_use]
    pub fn with_resource(mut self, location: ResourceLocation, bytes: impl AsRef<[u8]>) -> Self {
        self.assets.insert(location, Arc::from(bytes.as_ref()));
        self
    }
}

impl ResourcePack for InMemoryPack {
    fn name(&self) -> &str {
        &self.name
    }

    fn root_resource(
        &self,
        name: &RootResourceName,
    ) -> MetadataResult<Option<ResourceStream<'_>>> {
        Ok(self.root.get(name).map(open_bytes))
    }

    fn resource(
        &self,
        location: &ResourceLocation,
    ) -> MetadataResult<Option<ResourceStream<'_>>> {
        Ok(self.assets.get(location).map(open_bytes))
    }

    fn resource_locations(&self) -> MetadataResult<Vec<ResourceLocation>> {
        Ok(self.assets.keys().cloned().collect())
    }
}

fn open_bytes(bytes: &Arc<[u8]>) -> ResourceStream<'static> {
    Box::new(Cursor::new(Arc::clone(bytes)))
}
