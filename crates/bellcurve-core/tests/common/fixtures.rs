//! Test fixture loading utilities

use std::path::PathBuf;

use bellcurve_core::{ChartConfig, DatasetCatalog, Explorer};
use bellcurve_stats::DistributionParams;

/// Get the path to a fixture file
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Load the sample dataset catalog
#[allow(dead_code)]
pub fn load_catalog() -> DatasetCatalog {
    DatasetCatalog::from_json(&load_fixture("datasets.json")).expect("fixture catalog parses")
}

/// Load a TOML chart config fixture
#[allow(dead_code)]
pub fn load_config(name: &str) -> ChartConfig {
    ChartConfig::from_toml(&load_fixture(&format!("config/{}", name)))
        .unwrap_or_else(|e| panic!("Invalid config fixture {}: {}", name, e))
}

/// Standard normal explorer with the default 800x400 layout
#[allow(dead_code)]
pub fn standard_explorer() -> Explorer {
    Explorer::new(DistributionParams::standard()).expect("default explorer")
}
