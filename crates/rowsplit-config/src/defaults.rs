//! Default values for every configuration section.

use crate::schema::*;
use rowsplit_common::SourceFormat;

/// Default piece distance in meters.
pub const DEFAULT_DISTANCE: f64 = 1000.0;

/// Default major gridline spacing, in seconds.
pub const DEFAULT_MAJOR_INTERVAL: f64 = 15.0;

/// Default minor gridline spacing, in seconds.
pub const DEFAULT_MINOR_INTERVAL: f64 = 5.0;

/// Blue, red, green, cyan, magenta, yellow.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#0000ff", "#ff0000", "#008000", "#00bfbf", "#bf00bf", "#bfbf00",
];

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            weighting: WeightingConfig::default(),
            chart: ChartConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: SourceFormat::Workbook,
            sheet: None,
            layout: None,
        }
    }
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            width: 800,
            height: 600,
            show_splits: true,
            major_interval: DEFAULT_MAJOR_INTERVAL,
            minor_interval: DEFAULT_MINOR_INTERVAL,
            palette: DEFAULT_PALETTE.iter().map(|c| (*c).to_string()).collect(),
            background_color: "#ffffff".to_string(),
            title_font_size: 20,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_chart() {
        let chart = ChartConfig::default();
        assert!((chart.distance - 1000.0).abs() < f64::EPSILON);
        assert!((chart.major_interval - 15.0).abs() < f64::EPSILON);
        assert!((chart.minor_interval - 5.0).abs() < f64::EPSILON);
        assert_eq!(chart.palette.len(), 6);
        assert!(chart.show_splits);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }
}
