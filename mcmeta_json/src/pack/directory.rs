//! Pack stored as a directory on disk.
//!
//! Root resources live directly under the pack directory; namespaced
//! resources live under `assets/<namespace>/<path>`. All access goes through
//! a capability handle on the pack directory, so resource paths cannot
//! escape it.

use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, DirEntry};

use super::{ResourcePack, ResourceStream};
use crate::error::io_error;
use crate::{MetadataResult, ResourceLocation, RootResourceName};

const ASSETS_DIR: &str = "assets";

/// A resource pack rooted at a directory.
#[derive(Debug)]
pub struct DirectoryPack {
    root: Utf8PathBuf,
    dir: Dir,
}

impl DirectoryPack {
    /// Open the pack directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MetadataError::Io`] when the directory cannot be
    /// opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> MetadataResult<Self> {
        let path = root.as_ref();
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|err| io_error(path, err))?;
        Ok(Self {
            root: path.to_path_buf(),
            dir,
        })
    }

    /// Directory the pack was opened from.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn open_optional(
        &self,
        relative: &Utf8Path,
    ) -> MetadataResult<Option<ResourceStream<'_>>> {
        match self.dir.open(relative) {
            Ok(file) => Ok(Some(Box::new(file))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&self.root.join(relative), err)),
        }
    }

    fn assets_dir(&self) -> MetadataResult<Option<Dir>> {
        match self.dir.open_dir(ASSETS_DIR) {
            Ok(dir) => Ok(Some(dir)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&self.root.join(ASSETS_DIR), err)),
        }
    }
}

impl ResourcePack for DirectoryPack {
    fn name(&self) -> &str {
        self.root.file_name().unwrap_or(self.root.as_str())
    }

    fn root_resource(
        &self,
        name: &RootResourceName,
    ) -> MetadataResult<Option<ResourceStream<'_>>> {
        self.open_optional(Utf8Path::new(name.as_str()))
    }

    fn resource(
        &self,
        location: &ResourceLocation,
    ) -> MetadataResult<Option<ResourceStream<'_>>> {
        let relative = Utf8Path::new(ASSETS_DIR)
            .join(location.namespace())
            .join(location.path());
        self.open_optional(&relative)
    }

    fn resource_locations(&self) -> MetadataResult<Vec<ResourceLocation>> {
        let Some(assets) = self.assets_dir()? else {
            return Ok(Vec::new());
        };
        let assets_path = self.root.join(ASSETS_DIR);
        let mut locations = Vec::new();
        for entry_result in assets.entries().map_err(|err| io_error(&assets_path, err))? {
            let entry = entry_result.map_err(|err| io_error(&assets_path, err))?;
            let Some(namespace) = directory_name(&entry, &assets_path)? else {
                continue;
            };
            let namespace_path = assets_path.join(&namespace);
            let namespace_dir = entry
                .open_dir()
                .map_err(|err| io_error(&namespace_path, err))?;
            let mut walker = Walker {
                namespace: &namespace,
                base: &namespace_path,
                found: &mut locations,
            };
            walker.walk(&namespace_dir, "")?;
        }
        locations.sort();
        Ok(locations)
    }
}

/// Returns the entry's name when it is a directory.
fn directory_name(
    entry: &DirEntry,
    parent: &Utf8Path,
) -> MetadataResult<Option<String>> {
    let file_type = entry.file_type().map_err(|err| io_error(parent, err))?;
    if !file_type.is_dir() {
        return Ok(None);
    }
    entry.file_name().map(Some).map_err(|err| io_error(parent, err))
}

struct Walker<'a> {
    namespace: &'a str,
    base: &'a Utf8Path,
    found: &'a mut Vec<ResourceLocation>,
}

impl Walker<'_> {
    /// Collect every file below `dir`, whose path relative to the namespace
    /// directory is `relative` (always `/`-separated).
    fn walk(&mut self, dir: &Dir, relative: &str) -> MetadataResult<()> {
        let current = self.base.join(relative);
        for entry_result in dir.entries().map_err(|err| io_error(&current, err))? {
            let entry = entry_result.map_err(|err| io_error(&current, err))?;
            let name = entry.file_name().map_err(|err| io_error(&current, err))?;
            let child = if relative.is_empty() {
                name
            } else {
                format!("{relative}/{name}")
            };
            let file_type = entry.file_type().map_err(|err| io_error(&current, err))?;
            if file_type.is_dir() {
                let child_dir = entry
                    .open_dir()
                    .map_err(|err| io_error(&self.base.join(&child), err))?;
                self.walk(&child_dir, &child)?;
            } else if file_type.is_file() {
                match ResourceLocation::new(self.namespace, child.as_str()) {
                    Ok(location) => self.found.push(location),
                    Err(err) => tracing::debug!(
                        path = %self.base.join(&child),
                        error = %err,
                        "skipping resource with invalid location"
                    ),
                }
            }
        }
        Ok(())
    }
}
