//! Turns metadata files into section reports.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mcmeta_json::{
    DEFAULT_LAYER, DirectoryPack, MetadataView, PluginRegistry, ResourceLocation, ResourcePack,
    section_layer,
};
use serde::Serialize;
use serde_json::Value;

use crate::config::InspectConfig;
use crate::error::InspectError;

const ASSETS_DIR: &str = "assets";

/// One section of a metadata file, in application order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionReport {
    /// Section name.
    pub section: String,
    /// Effective layer.
    pub layer: i32,
    /// Section body, present when values were requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Sections of the metadata describing one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceReport {
    /// Resource the metadata describes.
    pub resource: String,
    /// Where the metadata was read from.
    pub metadata: String,
    /// Sections in the order plugins apply them.
    pub sections: Vec<SectionReport>,
}

impl ResourceReport {
    /// Report the sections of `view` in its key order.
    #[must_use]
    pub fn from_view(
        resource: impl Into<String>,
        metadata: impl Into<String>,
        view: &MetadataView,
        should_show_values: bool,
    ) -> Self {
        let sections = view
            .keys()
            .map(|section| SectionReport {
                section: section.to_owned(),
                layer: view
                    .sub_view(section)
                    .map_or(DEFAULT_LAYER, |body| section_layer(&body)),
                value: should_show_values
                    .then(|| view.value(section).cloned())
                    .flatten(),
            })
            .collect();
        Self {
            resource: resource.into(),
            metadata: metadata.into(),
            sections,
        }
    }
}

/// Resource location of the metadata file at `path`.
///
/// A path containing `assets/<namespace>/...` maps to that namespace and
/// the remainder of the path. Any other path uses `namespace` and the bare
/// file name.
///
/// # Errors
///
/// Returns [`InspectError::UnknownLocation`] when `path` has no file name,
/// or a metadata error when the derived location is malformed.
pub fn infer_location(path: &Utf8Path, namespace: &str) -> Result<ResourceLocation, InspectError> {
    let parts: Vec<&str> = path.components().map(|part| part.as_str()).collect();
    if let Some(index) = parts.iter().rposition(|part| *part == ASSETS_DIR)
        && let Some(asset_namespace) = parts.get(index + 1)
        && let Some(rest) = parts.get(index + 2..)
        && !rest.is_empty()
    {
        return Ok(ResourceLocation::new(*asset_namespace, rest.join("/"))?);
    }
    let file_name = path
        .file_name()
        .ok_or_else(|| InspectError::UnknownLocation(path.to_path_buf()))?;
    Ok(ResourceLocation::new(namespace, file_name)?)
}

/// Inspect the metadata file at `path`.
///
/// # Errors
///
/// Returns an error when the location cannot be derived, no plugin handles
/// the file, or the file cannot be read or parsed.
pub fn inspect_file(
    path: &Utf8Path,
    location: Option<ResourceLocation>,
    config: &InspectConfig,
    registry: &PluginRegistry,
) -> Result<Vec<ResourceReport>, InspectError> {
    let metadata_location = match location {
        Some(explicit) => explicit,
        None => infer_location(path, &config.namespace)?,
    };
    let plugin = registry
        .plugin_for(&metadata_location)
        .ok_or_else(|| InspectError::NoParser(metadata_location.clone()))?;
    let file_name = path
        .file_name()
        .ok_or_else(|| InspectError::UnknownLocation(path.to_path_buf()))?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let io_error = |source| InspectError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
    let file = dir.open(file_name).map_err(io_error)?;

    let parsed = plugin.parser().parse(&metadata_location, Box::new(file))?;
    tracing::debug!(location = %metadata_location, plugin = plugin.id(), "parsed metadata file");
    Ok(parsed
        .iter()
        .map(|(texture, view)| {
            ResourceReport::from_view(
                texture.to_string(),
                metadata_location.to_string(),
                view,
                config.show_values,
            )
        })
        .collect())
}

/// Inspect the pack-level metadata and every metadata file of the pack at
/// `root`.
///
/// Files that fail to parse are logged and skipped, as a host loading the
/// pack would do.
///
/// # Errors
///
/// Returns an error when the pack cannot be opened or listed.
pub fn inspect_pack(
    root: &Utf8Path,
    config: &InspectConfig,
    registry: &PluginRegistry,
) -> Result<Vec<ResourceReport>, InspectError> {
    let pack = DirectoryPack::open(root)?;
    let mut reports = Vec::new();
    for plugin in registry.plugins() {
        for (metadata_name, described) in plugin.parser().parse_pack(&pack) {
            reports.extend(described.iter().map(|(resource, view)| {
                ResourceReport::from_view(
                    resource.as_str(),
                    metadata_name.as_str(),
                    view,
                    config.show_values,
                )
            }));
        }
    }

    for location in pack.resource_locations()? {
        let Some(plugin) = registry.plugin_for(&location) else {
            continue;
        };
        let Some(stream) = pack.resource(&location)? else {
            continue;
        };
        match plugin.parser().parse(&location, stream) {
            Ok(parsed) => reports.extend(parsed.iter().map(|(texture, view)| {
                ResourceReport::from_view(
                    texture.to_string(),
                    location.to_string(),
                    view,
                    config.show_values,
                )
            })),
            Err(err) => {
                tracing::warn!(pack = pack.name(), %location, error = %err, "skipping metadata");
            }
        }
    }
    Ok(reports)
}
