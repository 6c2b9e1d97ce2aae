//! Y-axis bounds for a split chart.

use rowsplit_common::{Result, RowsplitError};
use rowsplit_records::RecordSet;
use serde::Serialize;
use tracing::debug;

/// Bounds are whole multiples of this many seconds.
pub const BOUND_INTERVAL: f64 = 5.0;

/// Inclusive y-axis limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisBounds {
    /// Lower limit.
    pub min: f64,
    /// Upper limit.
    pub max: f64,
}

impl AxisBounds {
    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether a value lies within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Bounds covering every intermediate split of the selected athletes.
///
/// The lower bound is the smallest split floored to a multiple of 5. The
/// upper bound adds a fifth of the distance from the lower bound to the
/// largest split as headroom, then rounds up to a multiple of 5.
///
/// Fails with [`RowsplitError::EmptySelection`] when nothing is selected or
/// no selected athlete has intermediate splits, and with
/// [`RowsplitError::UnknownAthlete`] for a name missing from `records`.
pub fn compute_bounds<S: AsRef<str>>(selected: &[S], records: &RecordSet) -> Result<AxisBounds> {
    if selected.is_empty() {
        return Err(RowsplitError::empty_selection("no athletes selected"));
    }

    let mut observed: Option<(f64, f64)> = None;
    for name in selected {
        let name = name.as_ref();
        let record = records
            .get(name)
            .ok_or_else(|| RowsplitError::UnknownAthlete(name.to_string()))?;

        for &split in &record.splits {
            observed = Some(match observed {
                None => (split, split),
                Some((lo, hi)) => (lo.min(split), hi.max(split)),
            });
        }
    }

    let (min_split, max_split) = observed.ok_or_else(|| {
        RowsplitError::empty_selection("none of the selected athletes has intermediate splits")
    })?;

    let min = (min_split / BOUND_INTERVAL).floor() * BOUND_INTERVAL;
    let max = ((max_split + (max_split - min) / 5.0) / BOUND_INTERVAL).ceil() * BOUND_INTERVAL;

    debug!(min_split, max_split, min, max, "computed split bounds");
    Ok(AxisBounds { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowsplit_records::PerformanceRecord;

    fn record(name: &str, splits: &[f64]) -> PerformanceRecord {
        PerformanceRecord {
            name: name.to_string(),
            weight: None,
            time: 400.0,
            split: 100.0,
            raw_split: 100.0,
            splits: splits.to_vec(),
            adjusted: false,
            date: None,
            distance: None,
        }
    }

    fn records() -> RecordSet {
        [
            ("A".to_string(), record("A", &[100.0, 105.0, 98.0])),
            ("B".to_string(), record("B", &[110.0, 90.0, 95.0])),
            ("C".to_string(), record("C", &[])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_two_athletes() {
        let bounds = compute_bounds(&["A", "B"], &records()).unwrap();
        assert_eq!(bounds, AxisBounds { min: 90.0, max: 115.0 });
    }

    #[test]
    fn test_single_athlete() {
        // min 95, max ceil((105 + 2) / 5) * 5 = 110
        let bounds = compute_bounds(&["A"], &records()).unwrap();
        assert_eq!(bounds, AxisBounds { min: 95.0, max: 110.0 });
    }

    #[test]
    fn test_first_athlete_without_splits_is_skipped() {
        let bounds = compute_bounds(&["C", "A"], &records()).unwrap();
        assert_eq!(bounds.min, 95.0);
    }

    #[test]
    fn test_empty_selection() {
        let none: [&str; 0] = [];
        assert!(matches!(
            compute_bounds(&none, &records()),
            Err(RowsplitError::EmptySelection { .. })
        ));
        assert!(matches!(
            compute_bounds(&["C"], &records()),
            Err(RowsplitError::EmptySelection { .. })
        ));
    }

    #[test]
    fn test_unknown_athlete() {
        assert!(matches!(
            compute_bounds(&["A", "Z"], &records()),
            Err(RowsplitError::UnknownAthlete(name)) if name == "Z"
        ));
    }
}
