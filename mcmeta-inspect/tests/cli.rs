//! End-to-end tests for the `mcmeta-inspect` binary.

use anyhow::{Result, anyhow, ensure};
use assert_cmd::Command;
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;
use test_helpers::json::sections;

struct PackDir {
    _temp: TempDir,
    root: Utf8PathBuf,
}

#[fixture]
fn pack_dir() -> Result<PackDir> {
    let temp = tempfile::tempdir()?;
    let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
        .map_err(|path| anyhow!("temporary path is not UTF-8: {}", path.display()))?;
    let textures = root.join("assets/minecraft/textures");
    fs::create_dir_all(&textures)?;
    fs::write(
        textures.join("sun.png.moremcmeta"),
        sections(&[("a", Some(2)), ("b", Some(1)), ("c", None)]),
    )?;
    Ok(PackDir { _temp: temp, root })
}

fn inspect(dir: &PackDir) -> Result<Command> {
    let mut command = Command::cargo_bin("mcmeta-inspect")?;
    command
        .current_dir(&dir.root)
        .env_remove("RUST_LOG")
        .env_remove("MCMETA_INSPECT_NAMESPACE")
        .env_remove("MCMETA_INSPECT_FORMAT")
        .env_remove("MCMETA_INSPECT_SHOW_VALUES");
    Ok(command)
}

#[rstest]
fn file_command_prints_application_order(pack_dir: Result<PackDir>) -> Result<()> {
    let dir = pack_dir?;
    let output = inspect(&dir)?
        .args(["file", "assets/minecraft/textures/sun.png.moremcmeta"])
        .assert()
        .success()
        .get_output()
        .clone();
    let stdout = String::from_utf8(output.stdout)?;
    let expected = concat!(
        "minecraft:textures/sun.png (from minecraft:textures/sun.png.moremcmeta)\n",
        "  1. c (layer 0)\n",
        "  2. b (layer 1)\n",
        "  3. a (layer 2)\n",
    );
    ensure!(stdout == expected, "unexpected output:\n{stdout}");
    Ok(())
}

#[rstest]
fn pack_command_honours_config_file(pack_dir: Result<PackDir>) -> Result<()> {
    let dir = pack_dir?;
    fs::write(dir.root.join(".mcmeta-inspect.toml"), "format = \"json\"\n")?;
    let output = inspect(&dir)?
        .args(["pack", "."])
        .assert()
        .success()
        .get_output()
        .clone();
    let rendered: Value = serde_json::from_slice(&output.stdout)?;
    ensure!(
        rendered
            == json!([{
                "resource": "minecraft:textures/sun.png",
                "metadata": "minecraft:textures/sun.png.moremcmeta",
                "sections": [
                    {"section": "c", "layer": 0},
                    {"section": "b", "layer": 1},
                    {"section": "a", "layer": 2}
                ]
            }])
    );
    Ok(())
}

#[rstest]
fn invalid_metadata_fails(pack_dir: Result<PackDir>) -> Result<()> {
    let dir = pack_dir?;
    fs::write(dir.root.join("bad.png.moremcmeta"), r#"{"gui": 3}"#)?;
    let output = inspect(&dir)?
        .args(["file", "bad.png.moremcmeta"])
        .assert()
        .failure()
        .get_output()
        .clone();
    let stderr = String::from_utf8(output.stderr)?;
    ensure!(stderr.contains("minecraft:bad.png.moremcmeta"), "{stderr}");
    Ok(())
}
