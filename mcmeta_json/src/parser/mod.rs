//! Entry points turning metadata files into ordered views.
//!
//! [`MetadataParser`] is the interface hosts call for texture metadata and
//! for the pack-level metadata file. [`MetadataReader`] is the older,
//! single-result form of the same operation.

mod decode;

use std::collections::BTreeMap;

use crate::pack::{ResourcePack, ResourceStream};
use crate::{MetadataResult, MetadataView, ResourceLocation, RootResourceName};

pub use decode::decode_metadata;

/// Root file holding metadata for the pack icon.
pub const PACK_METADATA_NAME: &str = "pack.png.moremcmeta";

/// Root file the pack-level metadata describes.
pub const PACK_IMAGE_NAME: &str = "pack.png";

/// Views keyed by the texture each one describes.
pub type ParsedMetadata = BTreeMap<ResourceLocation, MetadataView>;

/// Pack-level views: metadata file name, then described root resource.
pub type PackMetadata = BTreeMap<RootResourceName, BTreeMap<RootResourceName, MetadataView>>;

/// Parses metadata files for a host's texture pipeline.
pub trait MetadataParser: Send + Sync {
    /// Parse the metadata stored at `location`.
    ///
    /// The returned map has one entry, keyed by the texture the metadata
    /// describes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MetadataError::InvalidMetadata`] when the stream is
    /// not a JSON object of object sections, or
    /// [`crate::MetadataError::InvalidLocation`] when `location` has no
    /// extension.
    fn parse(
        &self,
        location: &ResourceLocation,
        stream: ResourceStream<'_>,
    ) -> MetadataResult<ParsedMetadata>;

    /// Parse the pack-level metadata of `pack`.
    ///
    /// Never fails: a missing file yields an empty map, and an unreadable or
    /// invalid one is logged and also yields an empty map.
    fn parse_pack(&self, pack: &dyn ResourcePack) -> PackMetadata;
}

/// Metadata together with the texture it describes.
#[derive(Clone, Debug)]
pub struct ReadMetadata {
    /// Texture the metadata belongs to.
    pub texture_location: ResourceLocation,
    /// Plugin-ordered view of the metadata.
    pub metadata: MetadataView,
}

/// Single-result form of [`MetadataParser::parse`].
pub trait MetadataReader: Send + Sync {
    /// Read the metadata stored at `location`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MetadataParser::parse`].
    fn read(
        &self,
        location: &ResourceLocation,
        stream: ResourceStream<'_>,
    ) -> MetadataResult<ReadMetadata>;
}

/// Location of the texture described by the metadata file at `location`.
///
/// # Errors
///
/// Returns [`crate::MetadataError::InvalidLocation`] when the path has no
/// extension.
///
/// # Examples
///
/// ```
/// use mcmeta_json::{ResourceLocation, texture_location};
/// let metadata: ResourceLocation = "minecraft:textures/sun.png.moremcmeta".parse()?;
/// assert_eq!(texture_location(&metadata)?.to_string(), "minecraft:textures/sun.png");
/// # Ok::<(), mcmeta_json::MetadataError>(())
/// ```
pub fn texture_location(location: &ResourceLocation) -> MetadataResult<ResourceLocation> {
    location.strip_extension()
}

/// JSON implementation of [`MetadataParser`] and [`MetadataReader`].
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonMetadataParser;

impl JsonMetadataParser {
    /// A new parser. The parser holds no state.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MetadataReader for JsonMetadataParser {
    fn read(
        &self,
        location: &ResourceLocation,
        stream: ResourceStream<'_>,
    ) -> MetadataResult<ReadMetadata> {
        let texture = texture_location(location)?;
        let metadata = decode_metadata(&location.to_string(), stream)?;
        Ok(ReadMetadata {
            texture_location: texture,
            metadata,
        })
    }
}

impl MetadataParser for JsonMetadataParser {
    fn parse(
        &self,
        location: &ResourceLocation,
        stream: ResourceStream<'_>,
    ) -> MetadataResult<ParsedMetadata> {
        let read = self.read(location, stream)?;
        Ok(BTreeMap::from([(read.texture_location, read.metadata)]))
    }

    fn parse_pack(&self, pack: &dyn ResourcePack) -> PackMetadata {
        match read_pack_metadata(pack) {
            Ok(Some(metadata)) => metadata,
            Ok(None) => {
                tracing::debug!(pack = pack.name(), "pack has no {PACK_METADATA_NAME}");
                PackMetadata::new()
            }
            Err(err) => {
                tracing::error!(
                    pack = pack.name(),
                    error = %err,
                    "{PACK_METADATA_NAME} is invalid"
                );
                PackMetadata::new()
            }
        }
    }
}

fn read_pack_metadata(pack: &dyn ResourcePack) -> MetadataResult<Option<PackMetadata>> {
    let metadata_name = RootResourceName::new(PACK_METADATA_NAME)?;
    let Some(stream) = pack.root_resource(&metadata_name)? else {
        return Ok(None);
    };
    let view = decode_metadata(metadata_name.as_str(), stream)?;
    let image_name = RootResourceName::new(PACK_IMAGE_NAME)?;
    Ok(Some(BTreeMap::from([(
        metadata_name,
        BTreeMap::from([(image_name, view)]),
    )])))
}
