//! Namespaced resource identifiers.
//!
//! A [`ResourceLocation`] names a resource inside a pack's `assets` tree as
//! `namespace:path`. A [`RootResourceName`] names a file that sits directly
//! at the pack root, such as `pack.png`.

use std::fmt;
use std::str::FromStr;

use crate::{MetadataError, MetadataResult};

/// Namespace assumed when a location is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

const NAMESPACE_SEPARATOR: char = ':';

/// A `namespace:path` identifier for a resource.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceLocation {
    namespace: String,
    path: String,
}

impl ResourceLocation {
    /// Build a location from its parts, validating both.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::InvalidLocation`] when the namespace or path
    /// is empty or contains characters outside `[a-z0-9_.-]` (plus `/` for
    /// paths).
    ///
    /// # Examples
    ///
    /// ```
    /// use mcmeta_json::ResourceLocation;
    /// let location = ResourceLocation::new("minecraft", "textures/block/stone.png")?;
    /// assert_eq!(location.to_string(), "minecraft:textures/block/stone.png");
    /// # Ok::<(), mcmeta_json::MetadataError>(())
    /// ```
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> MetadataResult<Self> {
        let namespace_text = namespace.into();
        let path_text = path.into();
        check_part(&namespace_text, "namespace", is_namespace_char)
            .and_then(|()| check_part(&path_text, "path", is_path_char))
            .map_err(|message| {
                MetadataError::invalid_location(
                    format!("{namespace_text}{NAMESPACE_SEPARATOR}{path_text}"),
                    message,
                )
            })?;
        Ok(Self {
            namespace: namespace_text,
            path: path_text,
        })
    }

    /// Namespace component.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Path component.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the final `.`-separated suffix of the path, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        let file_name = self.path.rsplit('/').next()?;
        file_name.rsplit_once('.').map(|(_, ext)| ext)
    }

    /// Returns a location in the same namespace with the last `.ext` removed.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::InvalidLocation`] when the path has no
    /// extension to strip, or stripping it would leave an empty path.
    pub fn strip_extension(&self) -> MetadataResult<Self> {
        let Some((stem, _)) = self.path.rsplit_once('.') else {
            return Err(MetadataError::invalid_location(
                self.to_string(),
                "path has no extension to strip",
            ));
        };
        Self::new(self.namespace.clone(), stem)
    }
}

fn check_part(value: &str, part: &str, allowed: fn(char) -> bool) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{part} is empty"));
    }
    match value.chars().find(|ch| !allowed(*ch)) {
        Some(bad) => Err(format!("non [a-z0-9/._-] character '{bad}' in {part}")),
        None => Ok(()),
    }
}

const fn is_namespace_char(ch: char) -> bool {
    matches!(ch, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

const fn is_path_char(ch: char) -> bool {
    is_namespace_char(ch) || ch == '/'
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{NAMESPACE_SEPARATOR}{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceLocation {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(NAMESPACE_SEPARATOR) {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }
}

/// File name of a resource stored directly at a pack root.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RootResourceName(String);

impl RootResourceName {
    /// Wrap a root file name.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::InvalidLocation`] when `name` is empty or
    /// contains a path separator.
    pub fn new(name: impl Into<String>) -> MetadataResult<Self> {
        let text = name.into();
        if text.is_empty() {
            return Err(MetadataError::invalid_location(text, "root resource name is empty"));
        }
        if text.contains(['/', '\\']) {
            return Err(MetadataError::invalid_location(
                text,
                "root resource name must not contain a path separator",
            ));
        }
        Ok(Self(text))
    }

    /// The file name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RootResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RootResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests;
