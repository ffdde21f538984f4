//! Configuration for legend parsing

use serde::{Deserialize, Serialize};

/// Configuration for the legend text-block parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendParseConfig {
    /// Field separator within a row
    pub delimiter: char,

    /// Discard the first line as a header
    pub skip_header: bool,

    /// Reject colours that are not `#RRGGBB` hex strings
    pub validate_colours: bool,
}

impl Default for LegendParseConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            skip_header: true,
            validate_colours: false,
        }
    }
}

impl LegendParseConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> LegendParseConfigBuilder {
        LegendParseConfigBuilder::default()
    }
}

/// Builder for LegendParseConfig
#[derive(Debug, Default)]
pub struct LegendParseConfigBuilder {
    config: LegendParseConfig,
}

impl LegendParseConfigBuilder {
    /// Set the field delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set whether the first line is a header
    pub fn skip_header(mut self, skip: bool) -> Self {
        self.config.skip_header = skip;
        self
    }

    /// Enable or disable strict `#RRGGBB` colour checking
    pub fn validate_colours(mut self, validate: bool) -> Self {
        self.config.validate_colours = validate;
        self
    }

    /// Build the configuration
    pub fn build(self) -> LegendParseConfig {
        self.config
    }
}
