//! Configuration validation.

use crate::schema::{ChartConfig, Config};
use once_cell::sync::Lazy;
use regex::Regex;
use rowsplit_common::{Result, RowsplitError};

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern"));

/// Whether a string is a `#RRGGBB` color.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}

impl Config {
    /// Validates the configuration, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let issues = self.validation_issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(RowsplitError::config(issues.join("; ")))
        }
    }

    /// Lists every validation problem.
    pub fn validation_issues(&self) -> Vec<String> {
        let mut issues = chart_issues(&self.chart);

        if let Some(layout) = &self.input.layout {
            if let Err(reason) = layout.check() {
                issues.push(format!("input.layout: {reason}"));
            }
        }

        if let Some(sheet) = &self.input.sheet {
            if sheet.trim().is_empty() {
                issues.push("input.sheet must not be blank".to_string());
            }
        }

        if self.logging.level.trim().is_empty() {
            issues.push("logging.level must not be empty".to_string());
        }

        issues
    }
}

fn chart_issues(chart: &ChartConfig) -> Vec<String> {
    let mut issues = Vec::new();

    if !(chart.distance.is_finite() && chart.distance > 0.0) {
        issues.push(format!("chart.distance must be positive, got {}", chart.distance));
    }
    if chart.width == 0 || chart.height == 0 {
        issues.push("chart.width and chart.height must be non-zero".to_string());
    }
    for (name, interval) in [
        ("major_interval", chart.major_interval),
        ("minor_interval", chart.minor_interval),
    ] {
        if !(interval.is_finite() && interval > 0.0) {
            issues.push(format!("chart.{name} must be positive, got {interval}"));
        }
    }
    if chart.palette.is_empty() {
        issues.push("chart.palette must list at least one color".to_string());
    }
    for color in chart
        .palette
        .iter()
        .chain(std::iter::once(&chart.background_color))
    {
        if !is_hex_color(color) {
            issues.push(format!("'{color}' is not a #RRGGBB color"));
        }
    }

    issues
}
