//! Layered configuration for `mcmeta-inspect`.
//!
//! Precedence, lowest first: built-in defaults, the TOML configuration file,
//! `MCMETA_INSPECT_*` environment variables, then flags given on the command
//! line.

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use mcmeta_json::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};

use crate::cli::{Args, OutputFormat};
use crate::error::InspectError;

/// Configuration file read from the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = ".mcmeta-inspect.toml";

/// Prefix of the environment variables read into the configuration.
pub const ENV_PREFIX: &str = "MCMETA_INSPECT_";

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Namespace assumed for files outside an `assets/<namespace>` tree.
    pub namespace: String,
    /// Output format.
    pub format: OutputFormat,
    /// Whether section bodies are printed.
    pub show_values: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            format: OutputFormat::default(),
            show_values: false,
        }
    }
}

/// Flags that were actually supplied; absent ones do not override lower
/// layers.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_values: Option<bool>,
}

impl CliOverrides {
    fn from_args(args: &Args) -> Self {
        Self {
            namespace: args.namespace.clone(),
            format: args.format,
            show_values: args.should_show_values.then_some(true),
        }
    }
}

/// Merge every configuration layer for `args`.
///
/// # Errors
///
/// Returns [`InspectError::ConfigNotFound`] when `--config` names a missing
/// file, or [`InspectError::Config`] when a layer fails to parse.
pub fn load_config(args: &Args) -> Result<InspectConfig, InspectError> {
    let file_layer = match args.config.as_deref() {
        Some(path) => explicit_file(path)?,
        None => Toml::file(DEFAULT_CONFIG_FILE),
    };
    let config: InspectConfig = Figment::from(Serialized::defaults(InspectConfig::default()))
        .merge(file_layer)
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(CliOverrides::from_args(args)))
        .extract()?;
    tracing::debug!(?config, "resolved configuration");
    Ok(config)
}

fn explicit_file(path: &Utf8Path) -> Result<figment::providers::Data<Toml>, InspectError> {
    if !path.is_file() {
        return Err(InspectError::ConfigNotFound(path.to_path_buf()));
    }
    Ok(Toml::file(path))
}

#[cfg(test)]
mod tests;
