//! Reader for `.moremcmeta` JSON metadata files.
//!
//! A metadata file sits next to the texture it describes and holds one JSON
//! object. Each top-level key is a *section* configuring one plugin; each
//! section is an object that may carry an integer `layer`. This crate decodes
//! such a file into a [`MetadataView`] whose keys iterate in plugin
//! application order: lowest `layer` first (missing layers count as `0`),
//! ties broken by section name.
//!
//! ```
//! use mcmeta_json::{JsonMetadataParser, MetadataParser, ResourceLocation};
//!
//! let location: ResourceLocation = "minecraft:textures/block/lava.png.moremcmeta".parse()?;
//! let json = r#"{"animation": {"layer": 1, "frametime": 2}, "emissive": {}}"#;
//! let parsed = JsonMetadataParser::new().parse(&location, Box::new(json.as_bytes()))?;
//!
//! let texture: ResourceLocation = "minecraft:textures/block/lava.png".parse()?;
//! let view = &parsed[&texture];
//! assert_eq!(view.keys().collect::<Vec<_>>(), ["emissive", "animation"]);
//! let animation = view.sub_view("animation").expect("animation section");
//! assert_eq!(animation.integer_value("frametime"), Some(2));
//! # Ok::<(), mcmeta_json::MetadataError>(())
//! ```

mod error;
mod location;
pub mod order;
pub mod pack;
pub mod parser;
pub mod plugin;
mod result_ext;
pub mod view;

pub use error::{MetadataError, MetadataResult};
pub use location::{DEFAULT_NAMESPACE, ResourceLocation, RootResourceName};
pub use order::{
    DEFAULT_LAYER, LAYER_KEY, SectionError, SectionOrder, order_sections, section_layer,
};
pub use pack::{DirectoryPack, InMemoryPack, ResourcePack, ResourceStream};
pub use parser::{
    JsonMetadataParser, MetadataParser, MetadataReader, PACK_IMAGE_NAME, PACK_METADATA_NAME,
    PackMetadata, ParsedMetadata, ReadMetadata, decode_metadata, texture_location,
};
pub use plugin::{DISPLAY_NAME, EXTENSION, JsonParserPlugin, MOD_ID, ParserPlugin, PluginRegistry};
pub use result_ext::MetadataResultExt;
pub use view::{KeyOrder, MetadataView};
