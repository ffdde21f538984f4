//! Legend text-block export

use crate::error::ExportError;
use crate::models::LegendEntry;

/// Header line written at the top of every exported legend
pub const LEGEND_HEADER: &str = "colour, width, comp lithology, comp colour, comp grainsize";

/// Legend exporter - renders legend rows back to the text-block format
pub struct LegendExporter;

impl LegendExporter {
    /// Render a legend as a header line followed by one row per entry.
    ///
    /// Parsing the output with the default legend parser yields the same
    /// entries. Entries the text format cannot carry are rejected instead of
    /// being written in a form that reads back differently.
    pub fn to_text(entries: &[LegendEntry]) -> Result<String, ExportError> {
        let mut out = String::from(LEGEND_HEADER);
        for entry in entries {
            out.push('\n');
            out.push_str(&Self::row(entry)?);
        }
        Ok(out)
    }

    /// Render a single legend row
    pub fn row(entry: &LegendEntry) -> Result<String, ExportError> {
        if entry.width == 0 {
            return Err(ExportError::ZeroWidth {
                lithology: entry.primary_lithology.clone(),
            });
        }
        check_field("colour", &entry.colour, true)?;
        check_field("primary_lithology", &entry.primary_lithology, true)?;
        check_field("component_colour", &entry.component_colour, false)?;
        check_field("component_grainsize", &entry.component_grainsize, false)?;

        Ok(format!(
            "{}, {}, {}, {}, {}",
            entry.colour,
            entry.width,
            entry.primary_lithology,
            entry.component_colour,
            entry.component_grainsize
        ))
    }
}

fn check_field(field: &'static str, value: &str, mandatory: bool) -> Result<(), ExportError> {
    let reason = if mandatory && value.is_empty() {
        "is empty"
    } else if value.contains([',', '\n', '\r']) {
        "contains a delimiter or line break"
    } else if value.trim() != value {
        "has leading or trailing whitespace"
    } else {
        return Ok(());
    };

    Err(ExportError::UnrepresentableField {
        field,
        value: value.to_string(),
        reason,
    })
}
