//! Gridline positions for a split chart.

use crate::bounds::AxisBounds;
use rowsplit_common::{Result, RowsplitError};
use serde::Serialize;

/// Default spacing of major gridlines, in seconds.
pub const MAJOR_INTERVAL: f64 = 15.0;

/// Default spacing of minor gridlines, in seconds.
pub const MINOR_INTERVAL: f64 = 5.0;

/// Upper limit on ticks per sequence.
pub const MAX_TICKS: usize = 10_000;

/// Major and minor tick positions, each strictly increasing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickSet {
    /// Major ticks.
    pub major: Vec<f64>,
    /// Minor ticks.
    pub minor: Vec<f64>,
}

/// Ticks at every multiple of each interval inside the bounds.
///
/// Ticks are anchored to absolute multiples of the interval, not to
/// `bounds.min`: bounds `[95, 110]` with a major interval of 15 give a single
/// major tick at 105.
pub fn compute_ticks(bounds: &AxisBounds, major_interval: f64, minor_interval: f64) -> Result<TickSet> {
    Ok(TickSet {
        major: ticks_within(bounds, major_interval, "major_interval")?,
        minor: ticks_within(bounds, minor_interval, "minor_interval")?,
    })
}

/// [`compute_ticks`] with the default 15 and 5 second intervals.
pub fn default_ticks(bounds: &AxisBounds) -> Result<TickSet> {
    compute_ticks(bounds, MAJOR_INTERVAL, MINOR_INTERVAL)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn ticks_within(bounds: &AxisBounds, interval: f64, name: &str) -> Result<Vec<f64>> {
    if !(interval.is_finite() && interval > 0.0) {
        return Err(RowsplitError::invalid_parameter(
            name,
            format!("interval must be positive, got {interval}"),
        ));
    }
    if !(bounds.min.is_finite() && bounds.max.is_finite()) {
        return Err(RowsplitError::invalid_parameter(
            "bounds",
            "bounds must be finite",
        ));
    }

    let first = (bounds.min / interval).ceil() as i64;
    let last = (bounds.max / interval).floor() as i64;
    if last < first {
        return Ok(Vec::new());
    }

    let count = usize::try_from(last - first + 1).unwrap_or(usize::MAX);
    if count > MAX_TICKS {
        return Err(RowsplitError::invalid_parameter(
            name,
            format!("{count} ticks exceed the limit of {MAX_TICKS}"),
        ));
    }

    Ok((first..=last).map(|k| k as f64 * interval).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_bounds() {
        let bounds = AxisBounds { min: 90.0, max: 115.0 };
        let ticks = default_ticks(&bounds).unwrap();
        assert_eq!(ticks.major, vec![90.0, 105.0]);
        assert_eq!(ticks.minor, vec![90.0, 95.0, 100.0, 105.0, 110.0, 115.0]);
    }

    #[test]
    fn test_anchored_to_absolute_multiples() {
        let bounds = AxisBounds { min: 95.0, max: 110.0 };
        let ticks = default_ticks(&bounds).unwrap();
        assert_eq!(ticks.major, vec![105.0]);
    }

    #[test]
    fn test_no_major_tick_in_narrow_bounds() {
        let bounds = AxisBounds { min: 95.0, max: 100.0 };
        let ticks = default_ticks(&bounds).unwrap();
        assert!(ticks.major.is_empty());
        assert_eq!(ticks.minor, vec![95.0, 100.0]);
    }

    #[test]
    fn test_rejects_bad_interval() {
        let bounds = AxisBounds { min: 90.0, max: 115.0 };
        assert!(compute_ticks(&bounds, 0.0, 5.0).is_err());
        assert!(compute_ticks(&bounds, 15.0, -5.0).is_err());
        assert!(compute_ticks(&bounds, f64::NAN, 5.0).is_err());
    }

    #[test]
    fn test_rejects_excessive_tick_count() {
        let bounds = AxisBounds { min: 0.0, max: 1e9 };
        assert!(compute_ticks(&bounds, 15.0, 5.0).is_err());
    }
}
