//! Configuration for the explorer
//!
//! Sampling resolution, zoom limits, cursor stepping, plot layout and
//! styling. Loadable from TOML or JSON; every section has defaults, so a
//! partial file only overrides what it names.

use serde::{Deserialize, Serialize};

use bellcurve_stats::{DEFAULT_BIN_COUNT, DEFAULT_CURVE_POINTS};

use crate::error::{ConfigError, ConfigResult};
use crate::view::{Margins, Viewport};

/// Explorer-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Curve and histogram resolution
    pub sampling: SamplingConfig,
    /// Pan/zoom limits
    pub zoom: ZoomConfig,
    /// Cursor behavior
    pub cursor: CursorConfig,
    /// Plot size and margins
    pub layout: LayoutConfig,
    /// Markers, bands and grid
    pub style: StyleConfig,
}

/// Curve and histogram resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Points in the PDF polyline
    pub curve_points: usize,
    /// Histogram buckets across the domain
    pub bin_count: usize,
    /// Half-width of the domain in standard deviations
    pub domain_sigmas: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            curve_points: DEFAULT_CURVE_POINTS,
            bin_count: DEFAULT_BIN_COUNT,
            domain_sigmas: 4.0,
        }
    }
}

/// Pan/zoom limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Smallest x scale factor
    pub min_scale: f64,
    /// Largest x scale factor
    pub max_scale: f64,
    /// Scale multiplier for one wheel notch
    pub wheel_step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 5.0,
            wheel_step: 1.1,
        }
    }
}

/// Cursor behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Arrow-key step as a fraction of the standard deviation
    pub key_step_fraction: f64,
    /// Keep the cursor inside the domain
    pub clamp_to_domain: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            key_step_fraction: 0.1,
            clamp_to_domain: true,
        }
    }
}

/// Plot size and margins in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin_top: 20.0,
            margin_right: 30.0,
            margin_bottom: 40.0,
            margin_left: 50.0,
        }
    }
}

impl LayoutConfig {
    pub fn margins(&self) -> Margins {
        Margins {
            top: self.margin_top,
            right: self.margin_right,
            bottom: self.margin_bottom,
            left: self.margin_left,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height, self.margins())
    }
}

/// Markers, bands and grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// σ multiples that get a marker line
    pub marker_multiples: Vec<i32>,
    /// Opacity of the bands touching the mean
    pub band_base_opacity: f64,
    /// Approximate number of x-axis ticks
    pub x_tick_target: usize,
    /// Approximate number of y-axis ticks
    pub y_tick_target: usize,
    /// Draw gridlines at major ticks
    pub show_grid: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            marker_multiples: vec![-2, -1, 0, 1, 2],
            band_base_opacity: 0.3,
            x_tick_target: 10,
            y_tick_target: 5,
            show_grid: true,
        }
    }
}

impl ChartConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        let sampling = &self.sampling;
        if sampling.curve_points < 2 {
            return Err(out_of_range("curve_points must be at least 2"));
        }
        if sampling.bin_count == 0 {
            return Err(out_of_range("bin_count must be positive"));
        }
        if !(sampling.domain_sigmas.is_finite() && sampling.domain_sigmas > 0.0) {
            return Err(out_of_range("domain_sigmas must be positive"));
        }

        let zoom = &self.zoom;
        if !(zoom.min_scale.is_finite() && zoom.min_scale > 0.0) {
            return Err(out_of_range("min_scale must be positive"));
        }
        if !zoom.max_scale.is_finite() || zoom.min_scale > zoom.max_scale {
            return Err(out_of_range("min_scale must not exceed max_scale"));
        }
        if !(zoom.wheel_step.is_finite() && zoom.wheel_step > 1.0) {
            return Err(out_of_range("wheel_step must be greater than 1"));
        }

        if !(self.cursor.key_step_fraction.is_finite() && self.cursor.key_step_fraction > 0.0) {
            return Err(out_of_range("key_step_fraction must be positive"));
        }

        let layout = &self.layout;
        let margins = [
            layout.margin_top,
            layout.margin_right,
            layout.margin_bottom,
            layout.margin_left,
        ];
        if margins.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(out_of_range("margins must be non-negative"));
        }

        let opacity = self.style.band_base_opacity;
        if !(opacity > 0.0 && opacity <= 1.0) {
            return Err(out_of_range("band_base_opacity must be in (0, 1]"));
        }

        Ok(())
    }
}

fn out_of_range(message: &str) -> ConfigError {
    ConfigError::OutOfRange(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sampling.curve_points, 100);
        assert_eq!(config.sampling.bin_count, 30);
        assert_eq!(config.zoom.min_scale, 0.5);
        assert_eq!(config.zoom.max_scale, 5.0);
    }

    #[test]
    fn test_partial_toml() {
        let config = ChartConfig::from_toml(
            r#"
[sampling]
bin_count = 12

[cursor]
clamp_to_domain = false
"#,
        )
        .unwrap();
        assert_eq!(config.sampling.bin_count, 12);
        assert_eq!(config.sampling.curve_points, 100);
        assert!(!config.cursor.clamp_to_domain);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ChartConfig::default();
        let toml_str = config.to_toml().unwrap();
        assert_eq!(ChartConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_json_serialization() {
        let config = ChartConfig::default();
        let json = config.to_json().unwrap();
        let parsed = ChartConfig::from_json(&json).unwrap();
        assert_eq!(parsed.style.marker_multiples, vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_invalid_zoom_limits() {
        let mut config = ChartConfig::default();
        config.zoom.min_scale = 6.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_sampling() {
        let mut config = ChartConfig::default();
        config.sampling.bin_count = 0;
        assert!(config.validate().is_err());

        let mut config = ChartConfig::default();
        config.sampling.curve_points = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(ChartConfig::from_toml("[zoom]\nmin_scale = -1.0\n").is_err());
        assert!(ChartConfig::from_toml("not = [valid").is_err());
    }
}
