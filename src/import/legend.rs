//! Legend text-block import
//!
//! Parses the fixed legend format:
//!
//! ```text
//! colour, width, comp lithology, comp colour, comp grainsize
//! #F7E9A6, 3, Sandstone, Grey, VF-F
//! #FF99CC, 2, Anhydrite, ,
//! ```
//!
//! This is a plain line splitter, not a general CSV parser: there is no
//! quoting, and fields are trimmed of surrounding whitespace. Trailing
//! component columns may be missing and become empty strings; a row with
//! more than five fields is rejected.

use crate::config::LegendParseConfig;
use crate::error::MalformedDataError;
use crate::models::{LegendEntry, is_hex_colour};
use tracing::debug;

/// Number of columns in a legend row
pub const LEGEND_FIELD_COUNT: usize = 5;

/// Legend importer - parses legend text blocks into typed rows
#[derive(Debug, Clone, Default)]
pub struct LegendImporter {
    config: LegendParseConfig,
}

impl LegendImporter {
    /// Create a new legend importer with the given configuration
    pub fn new(config: LegendParseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LegendParseConfig {
        &self.config
    }

    /// Parse a legend text block.
    ///
    /// The first malformed row aborts the parse; no partial legend is
    /// returned.
    pub fn parse(&self, text: &str) -> Result<Vec<LegendEntry>, MalformedDataError> {
        if text.trim().is_empty() {
            return Err(MalformedDataError::Empty);
        }

        let skip = usize::from(self.config.skip_header);
        let mut entries = Vec::new();
        for (idx, line) in text.lines().enumerate().skip(skip) {
            if line.trim().is_empty() {
                continue;
            }
            entries.push(self.parse_row(line, idx + 1)?);
        }

        debug!("Parsed {} legend entries", entries.len());
        Ok(entries)
    }

    /// Parse a single data row; `line_number` is used in error reports
    pub fn parse_row(&self, line: &str, line_number: usize) -> Result<LegendEntry, MalformedDataError> {
        let fields: Vec<&str> = line.split(self.config.delimiter).map(str::trim).collect();
        if fields.len() > LEGEND_FIELD_COUNT {
            return Err(MalformedDataError::TooManyFields {
                line: line_number,
                count: fields.len(),
            });
        }
        let field = |idx: usize| fields.get(idx).copied().unwrap_or("");

        let colour = field(0);
        let width = field(1);
        let primary_lithology = field(2);
        let component_colour = field(3);
        let component_grainsize = field(4);

        if colour.is_empty() {
            return Err(MalformedDataError::MissingField {
                line: line_number,
                field: "colour",
            });
        }
        if self.config.validate_colours && !is_hex_colour(colour) {
            return Err(MalformedDataError::InvalidColour {
                line: line_number,
                value: colour.to_string(),
            });
        }

        let width = match width.parse::<u32>() {
            Ok(w) if w > 0 => w,
            _ => {
                return Err(MalformedDataError::InvalidWidth {
                    line: line_number,
                    value: width.to_string(),
                });
            }
        };

        if primary_lithology.is_empty() {
            return Err(MalformedDataError::MissingField {
                line: line_number,
                field: "primary_lithology",
            });
        }

        Ok(LegendEntry {
            colour: colour.to_string(),
            width,
            primary_lithology: primary_lithology.to_string(),
            component_colour: component_colour.to_string(),
            component_grainsize: component_grainsize.to_string(),
        })
    }
}

/// Parse a legend text block with the default configuration
pub fn parse_legend(text: &str) -> Result<Vec<LegendEntry>, MalformedDataError> {
    LegendImporter::default().parse(text)
}

/// Parse a single legend data row with the default configuration
pub fn parse_legend_line(line: &str) -> Result<LegendEntry, MalformedDataError> {
    LegendImporter::default().parse_row(line, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "colour, width, comp lithology, comp colour, comp grainsize";

    #[test]
    fn test_parse_full_row() {
        let entry = parse_legend_line("#F7E9A6, 3, Sandstone, Grey, VF-F").unwrap();
        assert_eq!(entry.colour, "#F7E9A6");
        assert_eq!(entry.width, 3);
        assert_eq!(entry.primary_lithology, "Sandstone");
        assert_eq!(entry.component_colour, "Grey");
        assert_eq!(entry.component_grainsize, "VF-F");
    }

    #[test]
    fn test_parse_row_with_blank_components() {
        let entry = parse_legend_line("#FF99CC, 2, Anhydrite, ,").unwrap();
        assert_eq!(entry.component_colour, "");
        assert_eq!(entry.component_grainsize, "");
    }

    #[test]
    fn test_parse_row_with_missing_trailing_fields() {
        let entry = parse_legend_line("#363434, 1, Coal").unwrap();
        assert_eq!(entry, LegendEntry::new("#363434", 1, "Coal"));

        let entry = parse_legend_line("#DBD6BC, 3, Heterolithic, Grey,").unwrap();
        assert_eq!(entry.component_colour, "Grey");
        assert_eq!(entry.component_grainsize, "");
    }

    #[test]
    fn test_non_numeric_width_is_rejected() {
        let err = parse_legend_line("#ABCDEF, notanumber, Shale, ,").unwrap_err();
        assert_eq!(
            err,
            MalformedDataError::InvalidWidth {
                line: 1,
                value: "notanumber".to_string()
            }
        );
    }

    #[test]
    fn test_zero_and_negative_width_are_rejected() {
        assert!(matches!(
            parse_legend_line("#ABCDEF, 0, Shale"),
            Err(MalformedDataError::InvalidWidth { .. })
        ));
        assert!(matches!(
            parse_legend_line("#ABCDEF, -2, Shale"),
            Err(MalformedDataError::InvalidWidth { .. })
        ));
    }

    #[test]
    fn test_missing_mandatory_fields() {
        assert!(matches!(
            parse_legend_line(" , 3, Sandstone"),
            Err(MalformedDataError::MissingField { field: "colour", .. })
        ));
        assert!(matches!(
            parse_legend_line("#F7E9A6, 3, , Grey"),
            Err(MalformedDataError::MissingField {
                field: "primary_lithology",
                ..
            })
        ));
        assert!(matches!(
            parse_legend_line("#F7E9A6, 3"),
            Err(MalformedDataError::MissingField {
                field: "primary_lithology",
                ..
            })
        ));
    }

    #[test]
    fn test_extra_fields_are_rejected() {
        let err = parse_legend_line("#F7E9A6, 3, Sandstone, Grey, VF-F, junk, more").unwrap_err();
        assert_eq!(err, MalformedDataError::TooManyFields { line: 1, count: 7 });

        // A trailing delimiter after the last column is a sixth (empty) field
        assert!(matches!(
            parse_legend_line("#FF99CC, 2, Anhydrite, , ,"),
            Err(MalformedDataError::TooManyFields { count: 6, .. })
        ));
    }

    #[test]
    fn test_extra_fields_abort_whole_block() {
        let text = format!("{}\n#F7E9A6, 3, Sandstone, Grey, VF-F\n#FF99CC, 2, Anhydrite, , , x", HEADER);
        assert_eq!(
            parse_legend(&text),
            Err(MalformedDataError::TooManyFields { line: 3, count: 6 })
        );
    }

    #[test]
    fn test_parse_block_discards_header_and_blank_lines() {
        let text = format!("{}\n#F7E9A6, 3, Sandstone, Grey, VF-F\n\n#FF99CC, 2, Anhydrite, ,\n", HEADER);
        let entries = parse_legend(&text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].primary_lithology, "Anhydrite");
    }

    #[test]
    fn test_header_only_yields_empty_legend() {
        assert!(parse_legend(HEADER).unwrap().is_empty());
    }

    #[test]
    fn test_empty_text_is_rejected() {
        assert_eq!(parse_legend("  \n"), Err(MalformedDataError::Empty));
    }

    #[test]
    fn test_error_reports_line_number() {
        let text = format!("{}\n#F7E9A6, 3, Sandstone\n#ABCDEF, x, Shale", HEADER);
        let err = parse_legend(&text).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_custom_config() {
        let importer = LegendImporter::new(
            LegendParseConfig::builder()
                .delimiter(';')
                .skip_header(false)
                .validate_colours(true)
                .build(),
        );

        let entries = importer.parse("#F7E9A6; 3; Sandstone; Grey; VF-F").unwrap();
        assert_eq!(entries[0].component_grainsize, "VF-F");

        let err = importer.parse("tan; 3; Sandstone").unwrap_err();
        assert!(matches!(err, MalformedDataError::InvalidColour { line: 1, .. }));

        // Commas are ordinary text under a different delimiter
        let entries = importer.parse("#F7E9A6; 3; Sand, silty").unwrap();
        assert_eq!(entries[0].primary_lithology, "Sand, silty");
        assert!(matches!(
            importer.parse("#F7E9A6; 3; Sandstone; Grey; VF-F; x"),
            Err(MalformedDataError::TooManyFields { count: 6, .. })
        ));
    }
}
