//! Tests for resource location parsing and extension stripping.

use super::{DEFAULT_NAMESPACE, ResourceLocation, RootResourceName};
use crate::MetadataError;
use anyhow::{Result, ensure};
use rstest::rstest;

#[rstest]
#[case::explicit_namespace("moremcmeta:textures/sun.png", "moremcmeta", "textures/sun.png")]
#[case::default_namespace("textures/block/stone.png", DEFAULT_NAMESPACE, "textures/block/stone.png")]
#[case::dotted_namespace("my.pack:a-b_c.d", "my.pack", "a-b_c.d")]
fn parses_locations(
    #[case] input: &str,
    #[case] namespace: &str,
    #[case] path: &str,
) -> Result<()> {
    let location: ResourceLocation = input.parse()?;
    ensure!(location.namespace() == namespace, "namespace mismatch for {input}");
    ensure!(location.path() == path, "path mismatch for {input}");
    Ok(())
}

#[rstest]
#[case::uppercase("Minecraft:stone.png")]
#[case::empty_path("minecraft:")]
#[case::empty_namespace(":stone.png")]
#[case::space("minecraft:stone block.png")]
#[case::slash_in_namespace("mine/craft:stone.png")]
fn rejects_malformed_locations(#[case] input: &str) {
    let result = input.parse::<ResourceLocation>();
    assert!(
        matches!(result, Err(MetadataError::InvalidLocation { .. })),
        "expected {input} to be rejected"
    );
}

#[rstest]
#[case::texture_metadata(
    "minecraft:textures/block/stone.png.moremcmeta",
    "minecraft:textures/block/stone.png"
)]
#[case::only_last_suffix("pack:a.b.c", "pack:a.b")]
#[case::dot_in_directory("pack:dir.v2/file", "pack:dir")]
fn strips_last_extension(#[case] input: &str, #[case] expected: &str) -> Result<()> {
    let location: ResourceLocation = input.parse()?;
    let stripped = location.strip_extension()?;
    ensure!(stripped.to_string() == expected, "got {stripped}");
    Ok(())
}

#[rstest]
fn strip_extension_requires_a_dot() -> Result<()> {
    let location = ResourceLocation::new("minecraft", "textures/stone")?;
    assert!(matches!(
        location.strip_extension(),
        Err(MetadataError::InvalidLocation { .. })
    ));
    Ok(())
}

#[rstest]
fn extension_reads_the_file_name_only() -> Result<()> {
    let with_ext: ResourceLocation = "minecraft:textures/stone.png.moremcmeta".parse()?;
    let without_ext: ResourceLocation = "minecraft:textures.v2/stone".parse()?;
    ensure!(with_ext.extension() == Some("moremcmeta"), "expected moremcmeta");
    ensure!(without_ext.extension().is_none(), "directory dot is not an extension");
    Ok(())
}

#[rstest]
fn locations_order_by_namespace_then_path() -> Result<()> {
    let mut locations: Vec<ResourceLocation> = ["b:a", "a:z", "a:b"]
        .into_iter()
        .map(str::parse::<ResourceLocation>)
        .collect::<Result<_, _>>()?;
    locations.sort();
    let rendered: Vec<String> = locations.iter().map(ToString::to_string).collect();
    ensure!(rendered == ["a:b", "a:z", "b:a"], "unexpected order {rendered:?}");
    Ok(())
}

#[rstest]
#[case::empty("")]
#[case::nested("textures/pack.png")]
#[case::windows("textures\\pack.png")]
fn root_names_reject_paths(#[case] input: &str) {
    assert!(RootResourceName::new(input).is_err());
}

#[rstest]
fn root_name_displays_verbatim() -> Result<()> {
    let name = RootResourceName::new("pack.png.moremcmeta")?;
    ensure!(name.to_string() == "pack.png.moremcmeta", "display mismatch");
    ensure!(name.as_str() == name.as_ref(), "accessors disagree");
    Ok(())
}
