//! Configuration schema definitions using serde.

use rowsplit_common::{ColumnLayout, SourceFormat};
use serde::{Deserialize, Serialize};

/// Main configuration structure for rowsplit.
///
/// Every section is optional in a config file; missing sections take their
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input table configuration.
    pub input: InputConfig,
    /// Weight adjustment configuration.
    pub weighting: WeightingConfig,
    /// Chart configuration.
    pub chart: ChartConfig,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Where fields live in the input table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Source format tag selecting the column layout preset.
    pub format: SourceFormat,
    /// Worksheet to read from a workbook. The first sheet when unset.
    pub sheet: Option<String>,
    /// Explicit layout replacing the format's preset.
    pub layout: Option<ColumnLayout>,
}

impl InputConfig {
    /// The layout in effect: the override if present, otherwise the preset.
    pub fn effective_layout(&self) -> ColumnLayout {
        self.layout
            .unwrap_or_else(|| ColumnLayout::for_format(self.format))
    }
}

/// Weight adjustment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightingConfig {
    /// Whether time and split are weight adjusted.
    pub enabled: bool,
}

/// Split chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Piece distance in meters, the x-axis extent.
    pub distance: f64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Whether intermediate split markers are drawn.
    pub show_splits: bool,
    /// Spacing of major gridlines, in seconds.
    pub major_interval: f64,
    /// Spacing of minor gridlines, in seconds.
    pub minor_interval: f64,
    /// Athlete colors as `#RRGGBB`, cycled when exhausted.
    pub palette: Vec<String>,
    /// Background color as `#RRGGBB`.
    pub background_color: String,
    /// Title font size.
    pub title_font_size: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level filter directive.
    pub level: String,
    /// Emit JSON lines.
    pub json: bool,
    /// Append logs to this file instead of stderr.
    pub file: Option<String>,
}

impl From<&LoggingSettings> for rowsplit_common::logging::LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            json_format: settings.json,
            file_path: settings.file.clone(),
            ..Self::default()
        }
    }
}
