//! Test utilities and shared test helpers for rowsplit.
//!
//! This module provides common testing utilities and fixtures that can be
//! used across all crates in the workspace for unit and integration testing.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Sample practice tables.
pub mod table_fixtures {
    /// A workbook sheet as text: header row, then
    /// `name | weight | time | split | splits...`.
    pub fn workbook_rows() -> Vec<Vec<&'static str>> {
        vec![
            vec!["Name", "Weight", "Time", "Split", "250m", "500m", "750m", "1000m"],
            vec!["Alice", "150", "3:45.2", "1:52.6", "1:50.1", "1:53.4", "1:54.0", "1:52.9"],
            vec!["Bruno", "", "3:30.8", "1:45.4", "1:44.0", "1:46.2", "1:46.8", ""],
            vec!["Chen", "270", "3:38.0", "1:49.0", "", "", "", ""],
        ]
    }

    /// An exported sheet: `date | distance | name | weight | time | split | splits...`.
    pub fn sheets_rows() -> Vec<Vec<&'static str>> {
        vec![
            vec!["2022/09/01", "2000", "Alice", "150", "7:40.0", "1:55.0", "1:53.0", "1:56.0", "1:57.0", "1:54.0"],
            vec!["2022/09/01", "2000", "Bruno", "", "7:12.4", "1:48.1", "1:47.0", "1:48.5", "1:49.0", "1:47.9"],
            vec!["2022/09/01", "1000", "Alice", "150", "3:46.0", "1:53.0"],
            vec!["2022/09/08", "2000", "Alice", "148", "7:36.8", "1:54.2", "1:52.0", "1:55.1"],
        ]
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Plausible 500m split times, in seconds.
    pub fn split_seconds_strategy() -> impl Strategy<Value = f64> {
        80.0f64..200.0
    }

    /// Plausible body weights, in pounds.
    pub fn weight_strategy() -> impl Strategy<Value = f64> {
        90.0f64..320.0
    }

    /// A non-empty run of intermediate splits.
    pub fn splits_strategy() -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(split_seconds_strategy(), 1..8)
    }

    /// Athlete names.
    pub fn name_strategy() -> impl Strategy<Value = String> {
        r"[A-Z][a-z]{2,10}".prop_map(|s| s)
    }
}
