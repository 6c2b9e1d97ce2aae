//! Legend and title text for split charts.

use rowsplit_common::seconds_to_clock;
use rowsplit_records::PerformanceRecord;
use std::fmt;

/// Legend entry for one athlete, one line per fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendLabel {
    /// Name, split, and the weight adjustment line when applicable.
    pub lines: Vec<String>,
}

impl LegendLabel {
    /// Joins the lines for backends that draw a single line of text.
    pub fn single_line(&self) -> String {
        self.lines.join("  ")
    }
}

impl fmt::Display for LegendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Builds the legend entry for `record`, labelled `key`.
///
/// With weighting on, the third line is `No Weight` for athletes without a
/// weight and otherwise the signed change to the split, e.g. `-7.5 s`, or
/// `+2.0 s` for athletes above the reference weight.
pub fn legend_label(key: &str, record: &PerformanceRecord, weight_adjusted: bool) -> LegendLabel {
    let mut lines = vec![key.to_string(), seconds_to_clock(record.split)];
    if weight_adjusted {
        if record.weight.is_some() {
            let saving = record.split_saving();
            if saving < 0.0 {
                lines.push(format!("+{:.1} s", -saving));
            } else {
                lines.push(format!("-{saving:.1} s"));
            }
        } else {
            lines.push("No Weight".to_string());
        }
    }
    LegendLabel { lines }
}

/// Chart title listing the plotted names in order.
pub fn chart_title<S: AsRef<str>>(names: &[S], weight_adjusted: bool) -> String {
    let joined = names.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
    if weight_adjusted {
        format!("Weight Adjusted Splits for {joined}")
    } else {
        format!("Splits for {joined}")
    }
}

/// Places each intermediate split at the end of its share of the piece:
/// the `i`-th of `n` splits sits at `distance * (i + 1) / n`.
#[allow(clippy::cast_precision_loss)]
pub fn marker_positions(splits: &[f64], distance: f64) -> Vec<(f64, f64)> {
    let count = splits.len() as f64;
    splits
        .iter()
        .enumerate()
        .map(|(i, &split)| (distance * (i + 1) as f64 / count, split))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn record(weight: Option<f64>, split: f64, raw_split: f64) -> PerformanceRecord {
        PerformanceRecord {
            name: "Alice".to_string(),
            weight,
            time: split * 4.0,
            split,
            raw_split,
            splits: vec![118.0, 121.5],
            adjusted: weight.is_some(),
            date: None,
            distance: None,
        }
    }

    #[test]
    fn test_plain_label() {
        let label = legend_label("Alice", &record(Some(150.0), 112.5, 120.0), false);
        assert_snapshot!(label.to_string(), @r"
        Alice
        1:52.5
        ");
    }

    #[test]
    fn test_weight_adjusted_label() {
        let label = legend_label("Alice", &record(Some(150.0), 112.5, 120.0), true);
        assert_snapshot!(label.to_string(), @r"
        Alice
        1:52.5
        -7.5 s
        ");
        assert_eq!(label.single_line(), "Alice  1:52.5  -7.5 s");
    }

    #[test]
    fn test_heavy_athlete_label_shows_added_seconds() {
        let label = legend_label("Alice", &record(Some(290.0), 102.0, 100.0), true);
        assert_eq!(label.lines[2], "+2.0 s");

        let level = legend_label("Alice", &record(Some(270.0), 100.0, 100.0), true);
        assert_eq!(level.lines[2], "-0.0 s");
    }

    #[test]
    fn test_adjusted_split_renders_its_tenth() {
        let label = legend_label("Alice", &record(Some(150.0), 105.3, 112.9), true);
        assert_eq!(label.lines, vec!["Alice", "1:45.3", "-7.6 s"]);
    }

    #[test]
    fn test_label_without_weight() {
        let label = legend_label("Bruno", &record(None, 120.0, 120.0), true);
        assert_eq!(label.lines, vec!["Bruno", "2:00.0", "No Weight"]);
    }

    #[test]
    fn test_titles() {
        assert_snapshot!(chart_title(&["Alice", "Bruno"], false), @"Splits for Alice, Bruno");
        assert_snapshot!(chart_title(&["Alice"], true), @"Weight Adjusted Splits for Alice");
    }

    #[test]
    fn test_marker_positions() {
        let markers = marker_positions(&[100.0, 105.0, 98.0, 101.0], 2000.0);
        assert_eq!(
            markers,
            vec![(500.0, 100.0), (1000.0, 105.0), (1500.0, 98.0), (2000.0, 101.0)]
        );
        assert!(marker_positions(&[], 1000.0).is_empty());
    }
}
