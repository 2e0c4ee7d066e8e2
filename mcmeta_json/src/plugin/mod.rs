//! Plugin descriptors and the registry hosts discover parsers through.
//!
//! A host asks each [`ParserPlugin`] for the metadata file extension it
//! handles and stores it in a [`PluginRegistry`]. When a metadata file is
//! found, the registry picks the plugin by the file's extension.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use crate::parser::{JsonMetadataParser, MetadataParser};
use crate::{MetadataError, MetadataResult, ResourceLocation};

/// Identifier of the JSON parser plugin.
pub const MOD_ID: &str = "moremcmeta_json_parser_plugin";

/// Human-readable name of the JSON parser plugin.
pub const DISPLAY_NAME: &str = "MoreMcmeta JSON Metadata Parser";

/// Extension of the metadata files the JSON parser reads.
pub const EXTENSION: &str = "moremcmeta";

/// A parser that can be registered with a host.
pub trait ParserPlugin: Send + Sync {
    /// File extension (without the leading dot) this plugin parses.
    fn extension(&self) -> &str;

    /// The parser instance.
    fn parser(&self) -> &dyn MetadataParser;

    /// Unique plugin identifier.
    fn id(&self) -> &str;

    /// Name shown to users.
    fn display_name(&self) -> &str;
}

/// Descriptor for [`JsonMetadataParser`].
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonParserPlugin {
    parser: JsonMetadataParser,
}

impl JsonParserPlugin {
    /// The descriptor.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parser: JsonMetadataParser::new(),
        }
    }
}

impl ParserPlugin for JsonParserPlugin {
    fn extension(&self) -> &str {
        EXTENSION
    }

    fn parser(&self) -> &dyn MetadataParser {
        &self.parser
    }

    fn id(&self) -> &str {
        MOD_ID
    }

    fn display_name(&self) -> &str {
        DISPLAY_NAME
    }
}

/// Parser plugins keyed by extension.
#[derive(Default)]
pub struct PluginRegistry {
    by_extension: BTreeMap<String, Arc<dyn ParserPlugin>>,
    ids: BTreeSet<String>,
}

impl PluginRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding [`JsonParserPlugin`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mcmeta_json::{PluginRegistry, ResourceLocation, MOD_ID};
    ///
    /// let registry = PluginRegistry::with_json_plugin();
    /// let location: ResourceLocation = "minecraft:textures/sun.png.moremcmeta".parse()?;
    /// assert_eq!(registry.plugin_for(&location).map(|p| p.id()), Some(MOD_ID));
    /// # Ok::<(), mcmeta_json::MetadataError>(())
    /// ```
    #[must_use]
    pub fn with_json_plugin() -> Self {
        let mut registry = Self::new();
        registry.insert(Arc::new(JsonParserPlugin::new()), EXTENSION.to_owned());
        registry
    }

    /// Register `plugin` under its extension.
    ///
    /// Extensions are matched case-insensitively and a leading `.` is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::InvalidPlugin`] for an empty extension or id,
    /// and [`MetadataError::DuplicatePlugin`] when the extension or the id is
    /// already registered.
    pub fn register<P>(&mut self, plugin: P) -> MetadataResult<()>
    where
        P: ParserPlugin + 'static,
    {
        let id = plugin.id();
        if id.is_empty() {
            return Err(MetadataError::InvalidPlugin {
                id: id.to_owned(),
                message: "plugin id is empty".to_owned(),
            });
        }
        let extension = normalize_extension(plugin.extension());
        if extension.is_empty() {
            return Err(MetadataError::InvalidPlugin {
                id: id.to_owned(),
                message: "extension is empty".to_owned(),
            });
        }
        if self.by_extension.contains_key(&extension) {
            return Err(MetadataError::DuplicatePlugin { key: extension });
        }
        if self.ids.contains(id) {
            return Err(MetadataError::DuplicatePlugin { key: id.to_owned() });
        }
        self.insert(Arc::new(plugin), extension);
        Ok(())
    }

    fn insert(&mut self, plugin: Arc<dyn ParserPlugin>, extension: String) {
        tracing::debug!(
            id = plugin.id(),
            display_name = plugin.display_name(),
            extension = %extension,
            "registered metadata parser plugin"
        );
        self.ids.insert(plugin.id().to_owned());
        self.by_extension.insert(extension, plugin);
    }

    /// The plugin registered for `extension`.
    #[must_use]
    pub fn plugin_for_extension(&self, extension: &str) -> Option<&dyn ParserPlugin> {
        self.by_extension
            .get(&normalize_extension(extension))
            .map(Arc::as_ref)
    }

    /// The plugin for a metadata file, chosen by the file's extension.
    #[must_use]
    pub fn plugin_for(&self, metadata_location: &ResourceLocation) -> Option<&dyn ParserPlugin> {
        metadata_location
            .extension()
            .and_then(|extension| self.plugin_for_extension(extension))
    }

    /// Registered plugins in extension order.
    pub fn plugins(&self) -> impl Iterator<Item = &dyn ParserPlugin> + '_ {
        self.by_extension.values().map(Arc::as_ref)
    }

    /// Number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.by_extension
                    .iter()
                    .map(|(extension, plugin)| (extension, plugin.id())),
            )
            .finish()
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_ascii_lowercase()
}
