//! Legend entry model
//!
//! A legend row maps a display colour and relative bar width to a lithology
//! description, optionally qualified by a component colour and grain size.

use serde::{Deserialize, Serialize};

/// One row of a lithology legend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Display colour, `#RRGGBB`
    #[serde(alias = "color")]
    pub colour: String,

    /// Relative bar width
    pub width: u32,

    /// Primary lithology name, e.g. `Sandstone`
    pub primary_lithology: String,

    /// Component colour, empty when not specified
    #[serde(default, alias = "component_color")]
    pub component_colour: String,

    /// Component grain size, empty when not specified
    #[serde(default)]
    pub component_grainsize: String,
}

impl LegendEntry {
    /// Create an entry with no component colour or grain size
    pub fn new(colour: impl Into<String>, width: u32, primary_lithology: impl Into<String>) -> Self {
        Self {
            colour: colour.into(),
            width,
            primary_lithology: primary_lithology.into(),
            component_colour: String::new(),
            component_grainsize: String::new(),
        }
    }

    /// Set the component colour
    pub fn with_component_colour(mut self, colour: impl Into<String>) -> Self {
        self.component_colour = colour.into();
        self
    }

    /// Set the component grain size
    pub fn with_component_grainsize(mut self, grainsize: impl Into<String>) -> Self {
        self.component_grainsize = grainsize.into();
        self
    }

    /// Whether `colour` is a well-formed `#RRGGBB` hex string
    pub fn has_hex_colour(&self) -> bool {
        is_hex_colour(&self.colour)
    }
}

/// Check a string against `^#[0-9A-Fa-f]{6}$`
pub fn is_hex_colour(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
