//! Chart configuration integration tests

mod common;

use bellcurve_core::render::Primitive;
use bellcurve_core::{ChartConfig, ConfigError, Explorer};
use bellcurve_stats::DistributionParams;
use common::fixtures::{load_config, load_fixture};

#[test]
fn test_compact_config_overrides() {
    let config = load_config("compact.toml");
    assert_eq!(config.sampling.curve_points, 60);
    assert_eq!(config.sampling.bin_count, 12);
    // Unset keys keep their defaults
    assert_eq!(config.sampling.domain_sigmas, 4.0);
    assert_eq!(config.zoom.min_scale, 0.5);
    assert_eq!(config.zoom.max_scale, 3.0);
    assert!(!config.style.show_grid);
}

#[test]
fn test_compact_config_drives_scene() {
    let config = load_config("compact.toml");
    let mut explorer = Explorer::with_config(config, DistributionParams::standard()).unwrap();
    explorer.set_sample(vec![0.0, 0.5, 1.0]).unwrap();

    let scene = explorer.scene();
    assert_eq!(scene.origin, (8.0, 2.0));
    assert_eq!(scene.plot_width, 150.0);
    assert_eq!(scene.plot_height, 72.0);
    assert_eq!(scene.curve().unwrap().len(), 60);
    assert_eq!(scene.bars().count(), 12);
    assert_eq!(scene.markers().count(), 7);
    assert!(!scene
        .primitives
        .iter()
        .any(|p| matches!(p, Primitive::GridLine { .. })));
}

#[test]
fn test_inverted_zoom_limits_rejected() {
    let err = ChartConfig::from_toml(&load_fixture("config/invalid_zoom.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange(_)));
    assert!(err.to_string().contains("max_scale"));
}

#[test]
fn test_malformed_toml() {
    assert!(matches!(
        ChartConfig::from_toml("[sampling\ncurve_points = 5"),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_toml_round_trip_of_fixture() {
    let config = load_config("compact.toml");
    let written = config.to_toml().unwrap();
    assert_eq!(ChartConfig::from_toml(&written).unwrap(), config);
}
