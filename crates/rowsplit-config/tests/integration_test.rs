//! Integration tests for rowsplit-config crate.
//!
//! These tests verify loading configuration files from disk.

use rowsplit_common::test_utils::create_temp_dir;
use rowsplit_common::{ColumnLayout, SourceFormat};
use rowsplit_config::{Config, ConfigLoader};

#[test]
fn test_load_partial_yaml_keeps_defaults() {
    let dir = create_temp_dir();
    let path = dir.path().join("rowsplit.yaml");
    std::fs::write(
        &path,
        "weighting:\n  enabled: true\nchart:\n  distance: 2000\n  palette: ['#112233']\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();

    assert!(config.weighting.enabled);
    assert!((config.chart.distance - 2000.0).abs() < f64::EPSILON);
    assert_eq!(config.chart.palette, vec!["#112233".to_string()]);
    assert_eq!(config.chart.width, 800);
    assert_eq!(config.input.format, SourceFormat::Workbook);
}

#[test]
fn test_load_toml_with_layout_override() {
    let dir = create_temp_dir();
    let path = dir.path().join("rowsplit.toml");
    std::fs::write(
        &path,
        r#"
[input]
format = "sheets_export"

[input.layout]
name_col = 0
weight_col = 1
time_col = 2
split_col = 3
splits_start_col = 4
header_rows = 1
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();

    assert_eq!(config.input.format, SourceFormat::SheetsExport);
    let layout = config.input.effective_layout();
    assert_eq!(layout.name_col, 0);
    assert_eq!(layout.header_rows, 1);
}

#[test]
fn test_effective_layout_defaults_to_preset() {
    let mut config = Config::default();
    config.input.format = SourceFormat::SheetsExport;
    assert_eq!(config.input.effective_layout(), ColumnLayout::SHEETS_EXPORT);
}

#[test]
fn test_invalid_file_is_rejected() {
    let dir = create_temp_dir();
    let path = dir.path().join("rowsplit.yaml");
    std::fs::write(&path, "chart:\n  major_interval: 0\n").unwrap();

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}

#[test]
fn test_load_explicit_path() {
    let dir = create_temp_dir();
    let path = dir.path().join("custom.yml");
    std::fs::write(&path, "chart:\n  show_splits: false\n").unwrap();

    let config = ConfigLoader::load(Some(&path)).unwrap();
    assert!(!config.chart.show_splits);
}
