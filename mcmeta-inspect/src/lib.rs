//! Library half of `mcmeta-inspect`.
//!
//! The binary parses [`cli::Args`], resolves an [`config::InspectConfig`]
//! from its configuration layers, then reports the plugin application order
//! of one metadata file or of a whole resource pack.

pub mod cli;
pub mod config;
pub mod error;
pub mod inspect;
pub mod output;

use std::io::Write;

use mcmeta_json::PluginRegistry;

use crate::cli::{Args, Command};
use crate::error::InspectError;

/// Run the command described by `args`, writing the report to `out`.
///
/// # Errors
///
/// Returns any configuration, inspection or output error.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), InspectError> {
    let config = config::load_config(args)?;
    let registry = PluginRegistry::with_json_plugin();
    let reports = match &args.command {
        Command::File { path, location } => {
            inspect::inspect_file(path, location.clone(), &config, &registry)?
        }
        Command::Pack { root } => inspect::inspect_pack(root, &config, &registry)?,
    };
    output::write_reports(out, &reports, config.format)
}
