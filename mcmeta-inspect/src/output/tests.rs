//! Tests for the report writers.

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::io::{self, Write};

use super::*;
use crate::inspect::SectionReport;

#[fixture]
fn reports() -> Vec<ResourceReport> {
    vec![ResourceReport {
        resource: "minecraft:textures/sun.png".to_owned(),
        metadata: "minecraft:textures/sun.png.moremcmeta".to_owned(),
        sections: vec![
            SectionReport {
                section: "gui".to_owned(),
                layer: -1,
                value: None,
            },
            SectionReport {
                section: "animation".to_owned(),
                layer: 3,
                value: Some(json!({"frametime": 2, "layer": 3})),
            },
        ],
    }]
}

#[rstest]
fn text_lists_numbered_sections(reports: Vec<ResourceReport>) -> Result<()> {
    let mut out = Vec::new();
    write_reports(&mut out, &reports, OutputFormat::Text)?;
    let text = String::from_utf8(out)?;
    let expected = concat!(
        "minecraft:textures/sun.png (from minecraft:textures/sun.png.moremcmeta)\n",
        "  1. gui (layer -1)\n",
        "  2. animation (layer 3)\n",
        "     {\"frametime\":2,\"layer\":3}\n",
    );
    ensure!(text == expected, "unexpected text:\n{text}");
    Ok(())
}

#[rstest]
fn text_marks_empty_metadata() -> Result<()> {
    let empty = [ResourceReport {
        resource: "pack.png".to_owned(),
        metadata: "pack.png.moremcmeta".to_owned(),
        sections: Vec::new(),
    }];
    let mut out = Vec::new();
    write_reports(&mut out, &empty, OutputFormat::Text)?;
    ensure!(String::from_utf8(out)? == "pack.png (from pack.png.moremcmeta)\n  (no sections)\n");
    Ok(())
}

#[rstest]
fn json_omits_absent_values(reports: Vec<ResourceReport>) -> Result<()> {
    let mut out = Vec::new();
    write_reports(&mut out, &reports, OutputFormat::Json)?;
    let rendered: Value = serde_json::from_slice(&out)?;
    ensure!(
        rendered
            == json!([{
                "resource": "minecraft:textures/sun.png",
                "metadata": "minecraft:textures/sun.png.moremcmeta",
                "sections": [
                    {"section": "gui", "layer": -1},
                    {"section": "animation", "layer": 3, "value": {"layer": 3, "frametime": 2}}
                ]
            }])
    );
    Ok(())
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[rstest]
fn write_failures_are_reported(reports: Vec<ResourceReport>) {
    assert!(matches!(
        write_reports(&mut ClosedPipe, &reports, OutputFormat::Text),
        Err(InspectError::Write(_))
    ));
}
