//! Tests for layered configuration loading.

use anyhow::{Result, ensure};
use clap::Parser;
use rstest::rstest;
use test_helpers::figment::{JailSetup, figment_error};

use super::*;

fn load(flags: &[&str]) -> figment::error::Result<Result<InspectConfig, InspectError>> {
    let argv = ["mcmeta-inspect"]
        .into_iter()
        .chain(flags.iter().copied())
        .chain(["file", "sun.png.moremcmeta"]);
    let args = Args::try_parse_from(argv).map_err(figment_error)?;
    Ok(load_config(&args))
}

fn loaded(setup: JailSetup<'_>, flags: &[&str]) -> Result<InspectConfig> {
    setup.run(|| load(flags)?.map_err(figment_error))
}

#[rstest]
fn defaults_apply_without_other_layers() -> Result<()> {
    let config = loaded(JailSetup::new(), &[])?;
    ensure!(config == InspectConfig::default());
    ensure!(config.namespace == "minecraft");
    Ok(())
}

#[rstest]
fn default_file_is_read_from_working_directory() -> Result<()> {
    let setup = JailSetup::new().file(
        DEFAULT_CONFIG_FILE,
        "namespace = \"examplemod\"\nformat = \"json\"\n",
    );
    let config = loaded(setup, &[])?;
    ensure!(config.namespace == "examplemod");
    ensure!(config.format == OutputFormat::Json);
    ensure!(!config.show_values);
    Ok(())
}

#[rstest]
fn explicit_file_replaces_default_file() -> Result<()> {
    let setup = JailSetup::new()
        .file(DEFAULT_CONFIG_FILE, "namespace = \"ignored\"\n")
        .file("custom.toml", "show_values = true\n");
    let config = loaded(setup, &["--config", "custom.toml"])?;
    ensure!(config.namespace == "minecraft");
    ensure!(config.show_values);
    Ok(())
}

#[rstest]
fn missing_explicit_file_is_reported() -> Result<()> {
    let outcome = JailSetup::new().run(|| load(&["--config", "absent.toml"]))?;
    ensure!(matches!(
        outcome,
        Err(InspectError::ConfigNotFound(ref path)) if path.as_str() == "absent.toml"
    ));
    Ok(())
}

#[rstest]
fn environment_overrides_file() -> Result<()> {
    let setup = JailSetup::new()
        .file(DEFAULT_CONFIG_FILE, "namespace = \"from_file\"\n")
        .env("MCMETA_INSPECT_NAMESPACE", "from_env");
    let config = loaded(setup, &[])?;
    ensure!(config.namespace == "from_env");
    Ok(())
}

#[rstest]
#[case::namespace(&["--namespace", "from_cli"], "from_cli", OutputFormat::Text, false)]
#[case::format(&["--format", "json"], "from_env", OutputFormat::Json, false)]
#[case::show_values(&["--show-values"], "from_env", OutputFormat::Text, true)]
fn supplied_flags_override_environment(
    #[case] flags: &[&str],
    #[case] namespace: &str,
    #[case] format: OutputFormat,
    #[case] show_values: bool,
) -> Result<()> {
    let setup = JailSetup::new().env("MCMETA_INSPECT_NAMESPACE", "from_env");
    let config = loaded(setup, flags)?;
    ensure!(config.namespace == namespace);
    ensure!(config.format == format);
    ensure!(config.show_values == show_values);
    Ok(())
}

#[rstest]
fn malformed_file_is_a_config_error() -> Result<()> {
    let outcome = JailSetup::new()
        .file(DEFAULT_CONFIG_FILE, "format = \"yaml\"\n")
        .run(|| load(&[]))?;
    ensure!(matches!(outcome, Err(InspectError::Config(_))));
    Ok(())
}
