//! Athlete colors.

use plotters::style::RGBColor;
use rowsplit_common::{Result, RowsplitError};

/// An ordered, non-empty list of colors. Indexing wraps around, so any
/// number of athletes can be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<RGBColor>,
}

impl Palette {
    /// Creates a palette; fails when `colors` is empty.
    pub fn new(colors: Vec<RGBColor>) -> Result<Self> {
        if colors.is_empty() {
            return Err(RowsplitError::invalid_parameter(
                "palette",
                "a palette needs at least one color",
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette from `#RRGGBB` strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let parsed = colors
            .iter()
            .map(|c| {
                parse_color(c.as_ref()).ok_or_else(|| {
                    RowsplitError::invalid_parameter(
                        "palette",
                        format!("'{}' is not a #RRGGBB color", c.as_ref()),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// The color for the `index`-th athlete.
    pub fn color(&self, index: usize) -> RGBColor {
        self.colors[index % self.colors.len()]
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; palettes are never empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                RGBColor(0, 0, 255),   // Blue
                RGBColor(255, 0, 0),   // Red
                RGBColor(0, 128, 0),   // Green
                RGBColor(0, 191, 191), // Cyan
                RGBColor(191, 0, 191), // Magenta
                RGBColor(191, 191, 0), // Yellow
            ],
        }
    }
}

/// Parse a `#RRGGBB` color string.
pub fn parse_color(color_str: &str) -> Option<RGBColor> {
    let hex = color_str.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
