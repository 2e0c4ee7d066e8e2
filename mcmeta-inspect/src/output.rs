//! Report writers.

use std::io::Write;

use crate::cli::OutputFormat;
use crate::error::InspectError;
use crate::inspect::ResourceReport;

/// Write `reports` to `out` in `format`.
///
/// # Errors
///
/// Returns [`InspectError::Write`] when `out` rejects a write, or
/// [`InspectError::Json`] when a report cannot be serialized.
pub fn write_reports<W: Write>(
    out: &mut W,
    reports: &[ResourceReport],
    format: OutputFormat,
) -> Result<(), InspectError> {
    match format {
        OutputFormat::Text => write_text(out, reports),
        OutputFormat::Json => write_json(out, reports),
    }
}

fn write_text<W: Write>(out: &mut W, reports: &[ResourceReport]) -> Result<(), InspectError> {
    for report in reports {
        writeln!(out, "{} (from {})", report.resource, report.metadata)
            .map_err(InspectError::Write)?;
        if report.sections.is_empty() {
            writeln!(out, "  (no sections)").map_err(InspectError::Write)?;
        }
        for (position, section) in (1_usize..).zip(&report.sections) {
            writeln!(
                out,
                "  {position}. {} (layer {})",
                section.section, section.layer
            )
            .map_err(InspectError::Write)?;
            if let Some(value) = &section.value {
                writeln!(out, "     {value}").map_err(InspectError::Write)?;
            }
        }
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, reports: &[ResourceReport]) -> Result<(), InspectError> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out).map_err(InspectError::Write)
}

#[cfg(test)]
mod tests;
