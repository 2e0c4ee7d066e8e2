//! Command-line interface definitions for `mcmeta-inspect`.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use mcmeta_json::ResourceLocation;
use serde::{Deserialize, Serialize};

/// Output formats supported by `mcmeta-inspect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One numbered line per section.
    #[default]
    Text,
    /// A JSON array of resource reports.
    Json,
}

/// Parsed CLI arguments for `mcmeta-inspect`.
#[derive(Debug, Parser)]
#[command(name = "mcmeta-inspect")]
#[command(about = "Show the plugin application order of .moremcmeta metadata")]
#[command(version)]
pub struct Args {
    /// What to inspect.
    #[command(subcommand)]
    pub command: Command,
    /// Configuration file (defaults to `.mcmeta-inspect.toml` when present).
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Namespace for metadata files outside an `assets/<namespace>` tree.
    #[arg(long, global = true, value_name = "namespace")]
    pub namespace: Option<String>,
    /// Output format.
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
    /// Print each section's body below its name.
    #[arg(long = "show-values", global = true)]
    pub should_show_values: bool,
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Inspection targets.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Inspect one metadata file.
    File {
        /// Path to the `.moremcmeta` file.
        path: Utf8PathBuf,
        /// Resource location of the file, overriding the derived one.
        #[arg(long, value_name = "namespace:path")]
        location: Option<ResourceLocation>,
    },
    /// Inspect every metadata file in a resource pack directory.
    Pack {
        /// Pack root directory.
        root: Utf8PathBuf,
    },
}
