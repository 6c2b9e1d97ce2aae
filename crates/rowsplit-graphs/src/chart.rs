//! Split comparison charts.
//!
//! [`SplitChart::build`] turns a selection of records into a [`ChartHandle`]
//! holding everything needed to draw: axis ranges, gridlines and one series
//! per athlete. Nothing is drawn until the handle is saved or rendered, and
//! no drawing state outlives a single render call.

use crate::bounds::{compute_bounds, AxisBounds};
use crate::labels::{chart_title, legend_label, marker_positions, LegendLabel};
use crate::palette::{parse_color, Palette};
use crate::ticks::{compute_ticks, TickSet};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use rowsplit_common::{Result, RowsplitError};
use rowsplit_config::ChartConfig;
use rowsplit_records::RecordSet;
use std::path::Path;
use tracing::{debug, info};

const GRID_ALPHA: f64 = 0.25;
const GRAY: RGBColor = RGBColor(128, 128, 128);
const MARKER_RADIUS: i32 = 4;

/// Drawing options for a split chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    /// Piece distance in meters; the x axis spans `[0, distance]`.
    pub distance: f64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Whether intermediate split markers are drawn.
    pub show_splits: bool,
    /// Whether the records carry weight adjusted splits.
    pub weight_adjusted: bool,
    /// Spacing of major gridlines, in seconds.
    pub major_interval: f64,
    /// Spacing of minor gridlines, in seconds.
    pub minor_interval: f64,
    /// Athlete colors.
    pub palette: Palette,
    /// Background fill.
    pub background: RGBColor,
    /// Title font size.
    pub title_font_size: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            distance: 1000.0,
            width: 800,
            height: 600,
            show_splits: true,
            weight_adjusted: false,
            major_interval: crate::ticks::MAJOR_INTERVAL,
            minor_interval: crate::ticks::MINOR_INTERVAL,
            palette: Palette::default(),
            background: WHITE,
            title_font_size: 20,
        }
    }
}

impl ChartOptions {
    /// Options from the `chart` configuration section.
    pub fn from_config(config: &ChartConfig, weight_adjusted: bool) -> Result<Self> {
        let background = parse_color(&config.background_color).ok_or_else(|| {
            RowsplitError::invalid_parameter(
                "background_color",
                format!("'{}' is not a #RRGGBB color", config.background_color),
            )
        })?;
        let palette = Palette::from_hex(&config.palette)?;

        Ok(Self {
            distance: config.distance,
            width: config.width,
            height: config.height,
            show_splits: config.show_splits,
            weight_adjusted,
            major_interval: config.major_interval,
            minor_interval: config.minor_interval,
            palette,
            background,
            title_font_size: config.title_font_size,
        })
    }
}

/// One athlete's line, markers and legend entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteSeries {
    /// Record key.
    pub key: String,
    /// Height of the reference line, the average split.
    pub split: f64,
    /// Intermediate split markers as `(distance, seconds)`.
    pub markers: Vec<(f64, f64)>,
    /// Line and marker color.
    pub color: RGBColor,
    /// Legend entry.
    pub label: LegendLabel,
}

/// A fully specified split chart, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartHandle {
    /// Chart title.
    pub title: String,
    /// X axis range in meters.
    pub x_range: (f64, f64),
    /// Y axis range in seconds.
    pub bounds: AxisBounds,
    /// Gridline positions.
    pub ticks: TickSet,
    /// Athletes in selection order.
    pub series: Vec<AthleteSeries>,
    /// Image size in pixels.
    pub size: (u32, u32),
    /// Background fill.
    pub background: RGBColor,
    /// Title font size.
    pub title_font_size: u32,
}

/// Builder for [`ChartHandle`]s.
pub struct SplitChart;

impl SplitChart {
    /// Lays out a chart comparing the `selected` records.
    ///
    /// Fails like [`compute_bounds`] for an empty selection, a selection
    /// without intermediate splits, or an unknown name, and like
    /// [`compute_ticks`] for bad gridline intervals.
    pub fn build<S: AsRef<str>>(
        selected: &[S],
        records: &RecordSet,
        options: &ChartOptions,
    ) -> Result<ChartHandle> {
        if !(options.distance.is_finite() && options.distance > 0.0) {
            return Err(RowsplitError::invalid_parameter(
                "distance",
                format!("distance must be positive, got {}", options.distance),
            ));
        }

        let bounds = compute_bounds(selected, records)?;
        let ticks = compute_ticks(&bounds, options.major_interval, options.minor_interval)?;

        let series = selected
            .iter()
            .enumerate()
            .map(|(index, key)| {
                let key = key.as_ref();
                let record = records
                    .get(key)
                    .ok_or_else(|| RowsplitError::UnknownAthlete(key.to_string()))?;
                let markers = if options.show_splits {
                    marker_positions(&record.splits, options.distance)
                } else {
                    Vec::new()
                };
                Ok(AthleteSeries {
                    key: key.to_string(),
                    split: record.split,
                    markers,
                    color: options.palette.color(index),
                    label: legend_label(key, record, options.weight_adjusted),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            athletes = series.len(),
            min = bounds.min,
            max = bounds.max,
            "laid out split chart"
        );

        Ok(ChartHandle {
            title: chart_title(selected, options.weight_adjusted),
            x_range: (0.0, options.distance),
            bounds,
            ticks,
            series,
            size: (options.width, options.height),
            background: options.background,
            title_font_size: options.title_font_size,
        })
    }
}

/// Shorthand for [`SplitChart::build`].
pub fn plot_splits<S: AsRef<str>>(
    selected: &[S],
    records: &RecordSet,
    options: &ChartOptions,
) -> Result<ChartHandle> {
    SplitChart::build(selected, records, options)
}

impl ChartHandle {
    /// Renders to `path`; `.svg` files use the SVG backend, `.png`, `.jpg`
    /// and `.bmp` files the bitmap backend.
    pub fn save(&self, path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("svg") => {
                let root = SVGBackend::new(path, self.size).into_drawing_area();
                self.draw(&root)?;
            }
            Some("png" | "jpg" | "jpeg" | "bmp") => {
                let root = BitMapBackend::new(path, self.size).into_drawing_area();
                self.draw(&root)?;
            }
            _ => {
                return Err(RowsplitError::invalid_parameter(
                    "output",
                    format!(
                        "unsupported image format for {}; use .png, .jpg, .bmp or .svg",
                        path.display()
                    ),
                ));
            }
        }

        info!("Saved split chart to {}", path.display());
        Ok(())
    }

    /// Renders to an in-memory SVG document.
    pub fn to_svg(&self) -> Result<String> {
        let mut buffer = String::new();
        {
            let root = SVGBackend::with_string(&mut buffer, self.size).into_drawing_area();
            self.draw(&root)?;
        }
        Ok(buffer)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<()> {
        root.fill(&self.background).map_err(draw_error)?;

        let (x_min, x_max) = self.x_range;
        let mut chart = ChartBuilder::on(root)
            .caption(&self.title, ("sans-serif", f64::from(self.title_font_size)))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(x_min..x_max, self.bounds.min..self.bounds.max)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc("Distance (m)")
            .y_desc("Time (sec)")
            .draw()
            .map_err(draw_error)?;

        for &y in &self.ticks.minor {
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x_min, y), (x_max, y)],
                    4,
                    4,
                    GRAY.mix(GRID_ALPHA).stroke_width(1),
                ))
                .map_err(draw_error)?;
        }
        chart
            .draw_series(
                self.ticks
                    .major
                    .iter()
                    .map(|&y| PathElement::new(vec![(x_min, y), (x_max, y)], BLACK.mix(GRID_ALPHA))),
            )
            .map_err(draw_error)?;

        for series in &self.series {
            let color = series.color;
            chart
                .draw_series(series.markers.iter().map(|&point| {
                    Circle::new(point, MARKER_RADIUS, color.filled())
                }))
                .map_err(draw_error)?;
            chart
                .draw_series(DashedLineSeries::new(
                    vec![(x_min, series.split), (x_max, series.split)],
                    8,
                    4,
                    color.stroke_width(2),
                ))
                .map_err(draw_error)?
                .label(series.label.single_line())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperMiddle)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
        Ok(())
    }
}

fn draw_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> RowsplitError {
    RowsplitError::graph(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowsplit_records::PerformanceRecord;

    fn record(name: &str, split: f64, splits: &[f64]) -> PerformanceRecord {
        PerformanceRecord {
            name: name.to_string(),
            weight: None,
            time: split * 4.0,
            split,
            raw_split: split,
            splits: splits.to_vec(),
            adjusted: false,
            date: None,
            distance: None,
        }
    }

    fn records() -> RecordSet {
        [
            ("A".to_string(), record("A", 101.0, &[100.0, 105.0, 98.0])),
            ("B".to_string(), record("B", 98.5, &[110.0, 90.0, 95.0])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_build_lays_out_axes() {
        let handle = SplitChart::build(&["A", "B"], &records(), &ChartOptions::default()).unwrap();
        assert_eq!(handle.bounds, AxisBounds { min: 90.0, max: 115.0 });
        assert_eq!(handle.ticks.major, vec![90.0, 105.0]);
        assert_eq!(handle.x_range, (0.0, 1000.0));
        assert_eq!(handle.title, "Splits for A, B");
        assert_eq!(handle.size, (800, 600));
    }

    #[test]
    fn test_series_follow_selection_order() {
        let handle = SplitChart::build(&["B", "A"], &records(), &ChartOptions::default()).unwrap();
        let keys: Vec<_> = handle.series.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(handle.series[0].color, RGBColor(0, 0, 255));
        assert_eq!(handle.series[1].color, RGBColor(255, 0, 0));
        assert_eq!(handle.series[0].split, 98.5);
    }

    #[test]
    fn test_markers_spread_over_distance() {
        let options = ChartOptions {
            distance: 1500.0,
            ..ChartOptions::default()
        };
        let handle = SplitChart::build(&["A"], &records(), &options).unwrap();
        assert_eq!(
            handle.series[0].markers,
            vec![(500.0, 100.0), (1000.0, 105.0), (1500.0, 98.0)]
        );
    }

    #[test]
    fn test_hidden_splits_leave_no_markers() {
        let options = ChartOptions {
            show_splits: false,
            ..ChartOptions::default()
        };
        let handle = SplitChart::build(&["A"], &records(), &options).unwrap();
        assert!(handle.series[0].markers.is_empty());
        assert_eq!(handle.bounds, AxisBounds { min: 95.0, max: 110.0 });
    }

    #[test]
    fn test_rejects_bad_distance() {
        let options = ChartOptions {
            distance: 0.0,
            ..ChartOptions::default()
        };
        assert!(matches!(
            SplitChart::build(&["A"], &records(), &options),
            Err(RowsplitError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_options_from_config() {
        let config = ChartConfig {
            distance: 2000.0,
            palette: vec!["#112233".to_string()],
            background_color: "#eeeeee".to_string(),
            ..ChartConfig::default()
        };
        let options = ChartOptions::from_config(&config, true).unwrap();
        assert_eq!(options.distance, 2000.0);
        assert!(options.weight_adjusted);
        assert_eq!(options.palette.color(3), RGBColor(0x11, 0x22, 0x33));
        assert_eq!(options.background, RGBColor(0xee, 0xee, 0xee));

        let bad = ChartConfig {
            background_color: "white".to_string(),
            ..ChartConfig::default()
        };
        assert!(ChartOptions::from_config(&bad, false).is_err());

        let empty = ChartConfig {
            palette: Vec::new(),
            ..ChartConfig::default()
        };
        assert!(matches!(
            ChartOptions::from_config(&empty, false),
            Err(RowsplitError::InvalidParameter { ref name, .. }) if name == "palette"
        ));
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let handle = SplitChart::build(&["A"], &records(), &ChartOptions::default()).unwrap();
        assert!(handle.save(Path::new("chart.txt")).is_err());
    }

    #[test]
    #[ignore = "requires system fonts"]
    fn test_svg_render() {
        let handle = SplitChart::build(&["A", "B"], &records(), &ChartOptions::default()).unwrap();
        let svg = handle.to_svg().unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Splits for A, B"));
    }
}
