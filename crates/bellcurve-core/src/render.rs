//! Render contract
//!
//! Turns the current distribution, sample, transform and cursor into a flat
//! list of drawing primitives. The list is rebuilt from scratch on every
//! change; diffing and painting belong to the backend.
//!
//! Paint order: gridlines, σ bands, histogram bars, density curve, σ
//! markers, axis ticks, cursor point, tooltip.
//!
//! All coordinates are plot-relative pixels: `(0, 0)` is the top-left of
//! the plot area, which sits at [`Scene::origin`] on the surface. Items
//! pushed outside the plot by zooming are kept; clipping is the backend's
//! job.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use bellcurve_stats::{Bin, CurvePoint, DistributionParams, Domain};

use crate::axis::{calculate_ticks, Orientation};
use crate::config::ChartConfig;
use crate::interaction::{Cursor, Tooltip};
use crate::labels::{aria_label, sigma_label};
use crate::mapper::{density_scale, LinearScale, XMapper};
use crate::view::{Transform, Viewport};

/// Horizontal gap between adjacent histogram bars
const BAR_GAP: f64 = 1.0;

/// Tooltip text offset from the cursor point
const TOOLTIP_OFFSET: (f64, f64) = (10.0, -10.0);

/// Radius of the cursor point and series dots
pub const POINT_RADIUS: f64 = 4.0;

/// One drawable element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Gridline across the plot at a major tick
    GridLine {
        orientation: Orientation,
        position: f64,
    },

    /// Shaded region between two σ markers
    Band { x0: f64, x1: f64, opacity: f64 },

    /// Histogram bar, top-left corner plus size
    Bar {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        count: usize,
    },

    /// Polyline through the given points
    Path { points: Vec<(f64, f64)> },

    /// Vertical marker line at a σ multiple
    Marker {
        x: f64,
        multiple: i32,
        label: String,
    },

    /// Axis tick with its label
    Tick {
        orientation: Orientation,
        position: f64,
        label: String,
    },

    /// Data point marker
    Dot { x: f64, y: f64, radius: f64 },

    /// Highlighted point under the cursor
    CursorPoint { x: f64, y: f64 },

    /// Tooltip text anchored at a point
    Label { x: f64, y: f64, text: String },
}

/// A complete frame, ready for a backend to paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Surface width in pixels
    pub width: f64,
    /// Surface height in pixels
    pub height: f64,
    /// Top-left of the plot area on the surface
    pub origin: (f64, f64),
    /// Plot area width
    pub plot_width: f64,
    /// Plot area height
    pub plot_height: f64,
    /// Primitives in paint order
    pub primitives: Vec<Primitive>,
    /// Accessible description of the chart
    pub aria_label: String,
}

impl Scene {
    /// A scene with nothing to draw
    pub fn empty(viewport: &Viewport, aria_label: String) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
            origin: viewport.origin(),
            plot_width: viewport.plot_width().max(0.0),
            plot_height: viewport.plot_height().max(0.0),
            primitives: Vec::new(),
            aria_label,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// The density curve (first path)
    pub fn curve(&self) -> Option<&[(f64, f64)]> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Path { points } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn bars(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Bar { .. }))
    }

    pub fn markers(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Marker { .. }))
    }

    pub fn ticks(&self, orientation: Orientation) -> impl Iterator<Item = &Primitive> + '_ {
        self.primitives.iter().filter(
            move |p| matches!(p, Primitive::Tick { orientation: o, .. } if *o == orientation),
        )
    }

    /// Tooltip text, when the cursor is set
    pub fn tooltip(&self) -> Option<&str> {
        self.primitives.iter().find_map(|p| match p {
            Primitive::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Sample overlay: bins plus the sample size they were drawn from
#[derive(Debug, Clone, Copy)]
pub struct HistogramOverlay<'a> {
    pub bins: &'a [Bin],
    pub total: usize,
}

/// Everything a frame is built from
#[derive(Debug, Clone, Copy)]
pub struct SceneInput<'a> {
    pub params: &'a DistributionParams,
    pub domain: Domain,
    pub curve: &'a [CurvePoint],
    pub histogram: Option<HistogramOverlay<'a>>,
    pub transform: Transform,
    pub cursor: Option<Cursor>,
    pub viewport: &'a Viewport,
    pub config: &'a ChartConfig,
}

/// Build the frame for the given state.
///
/// A viewport with no plot area yields an empty scene instead of dividing
/// by zero.
pub fn render_scene(input: &SceneInput<'_>) -> Scene {
    let viewport = input.viewport;
    let label = aria_label(input.params);

    let plot_width = viewport.plot_width();
    let plot_height = viewport.plot_height();
    let mappers = if viewport.is_degenerate() {
        None
    } else {
        XMapper::new(input.domain, plot_width, input.transform)
            .zip(density_scale(input.params, plot_height))
    };
    let Some((x, y)) = mappers else {
        warn!(
            width = viewport.width,
            height = viewport.height,
            "degenerate viewport, nothing to render"
        );
        return Scene::empty(viewport, label);
    };

    let mut primitives = Vec::new();
    let style = &input.config.style;
    let (visible_min, visible_max) = x.visible();
    let x_ticks = calculate_ticks(visible_min, visible_max, style.x_tick_target);
    let y_ticks = calculate_ticks(0.0, input.params.peak(), style.y_tick_target);

    if style.show_grid {
        primitives.extend(y_ticks.iter().map(|t| Primitive::GridLine {
            orientation: Orientation::Vertical,
            position: y.map(t.value),
        }));
        primitives.extend(x_ticks.iter().map(|t| Primitive::GridLine {
            orientation: Orientation::Horizontal,
            position: x.to_pixel(t.value),
        }));
    }

    let mut multiples = style.marker_multiples.clone();
    multiples.sort_unstable();
    multiples.dedup();

    primitives.extend(sigma_bands(&multiples, input.params, &x, style.band_base_opacity));

    if let Some(overlay) = input.histogram {
        primitives.extend(histogram_bars(overlay, &x, &y, plot_height));
    }

    primitives.push(Primitive::Path {
        points: input
            .curve
            .iter()
            .map(|p| (x.to_pixel(p.x), y.map(p.y)))
            .collect(),
    });

    primitives.extend(multiples.iter().map(|&m| Primitive::Marker {
        x: x.to_pixel(input.params.at_sigma(f64::from(m))),
        multiple: m,
        label: sigma_label(m),
    }));

    primitives.extend(x_ticks.into_iter().map(|t| Primitive::Tick {
        orientation: Orientation::Horizontal,
        position: x.to_pixel(t.value),
        label: t.label,
    }));
    primitives.extend(y_ticks.into_iter().map(|t| Primitive::Tick {
        orientation: Orientation::Vertical,
        position: y.map(t.value),
        label: t.label,
    }));

    if let Some(cursor) = input.cursor {
        let tooltip = Tooltip::at(cursor.data_x, input.params);
        let (px, py) = (x.to_pixel(tooltip.data_x), y.map(tooltip.density));
        primitives.push(Primitive::CursorPoint { x: px, y: py });
        primitives.push(Primitive::Label {
            x: px + TOOLTIP_OFFSET.0,
            y: py + TOOLTIP_OFFSET.1,
            text: tooltip.text,
        });
    }

    trace!(count = primitives.len(), "scene built");

    Scene {
        width: viewport.width,
        height: viewport.height,
        origin: viewport.origin(),
        plot_width,
        plot_height,
        primitives,
        aria_label: label,
    }
}

/// Bands between consecutive markers, fading with distance from the mean
fn sigma_bands(
    multiples: &[i32],
    params: &DistributionParams,
    x: &XMapper,
    base_opacity: f64,
) -> Vec<Primitive> {
    multiples
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let distance = a.abs().max(b.abs()).max(1);
            Primitive::Band {
                x0: x.to_pixel(params.at_sigma(f64::from(a))),
                x1: x.to_pixel(params.at_sigma(f64::from(b))),
                opacity: base_opacity / f64::from(distance),
            }
        })
        .collect()
}

/// Bars drawn as densities on the curve's y scale, zoomed with the x axis
fn histogram_bars(
    overlay: HistogramOverlay<'_>,
    x: &XMapper,
    y: &LinearScale,
    plot_height: f64,
) -> Vec<Primitive> {
    overlay
        .bins
        .iter()
        .map(|bin| {
            let left = x.to_pixel(bin.x0);
            let top = y.map(bin.density(overlay.total)).max(0.0);
            Primitive::Bar {
                x: left,
                y: top,
                width: (x.to_pixel(bin.x1) - left - BAR_GAP).max(0.0),
                height: plot_height - top,
                count: bin.count,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Margins;
    use bellcurve_stats::{bin_histogram, sample_curve};

    struct Fixture {
        params: DistributionParams,
        curve: Vec<CurvePoint>,
        viewport: Viewport,
        config: ChartConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let params = DistributionParams::standard();
            let curve = sample_curve(params.domain(4.0).unwrap(), &params, 100).unwrap();
            Self {
                params,
                curve,
                viewport: Viewport::new(800.0, 400.0, Margins::default()),
                config: ChartConfig::default(),
            }
        }

        fn input(&self) -> SceneInput<'_> {
            SceneInput {
                params: &self.params,
                domain: self.params.domain(4.0).unwrap(),
                curve: &self.curve,
                histogram: None,
                transform: Transform::IDENTITY,
                cursor: None,
                viewport: &self.viewport,
                config: &self.config,
            }
        }
    }

    #[test]
    fn test_curve_peak_touches_top() {
        let fx = Fixture::new();
        let scene = render_scene(&fx.input());
        let curve = scene.curve().unwrap();

        assert_eq!(curve.len(), 100);
        let top = curve.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        // 100 points never land exactly on the mean
        assert!(top >= 0.0 && top < 1.0);
        assert!(curve.iter().all(|p| p.1 <= 400.0));
    }

    #[test]
    fn test_five_sigma_markers() {
        let fx = Fixture::new();
        let scene = render_scene(&fx.input());
        let markers: Vec<_> = scene.markers().collect();

        assert_eq!(markers.len(), 5);
        assert_eq!(
            markers[3],
            &Primitive::Marker {
                x: 500.0,
                multiple: 1,
                label: "1σ: 68.3% of data".to_string(),
            }
        );
    }

    #[test]
    fn test_band_opacity_fades() {
        let fx = Fixture::new();
        let scene = render_scene(&fx.input());
        let opacities: Vec<f64> = scene
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Band { opacity, .. } => Some(*opacity),
                _ => None,
            })
            .collect();
        assert_eq!(opacities, vec![0.15, 0.3, 0.3, 0.15]);
    }

    #[test]
    fn test_no_cursor_no_tooltip() {
        let fx = Fixture::new();
        assert!(render_scene(&fx.input()).tooltip().is_none());
    }

    #[test]
    fn test_cursor_tooltip() {
        let fx = Fixture::new();
        let mut input = fx.input();
        input.cursor = Some(Cursor { data_x: 0.0 });
        let scene = render_scene(&input);

        assert_eq!(scene.tooltip(), Some("Value: 0.00, Percentile: 50.0%"));
        let at_mean = |p: &Primitive| {
            matches!(p, Primitive::CursorPoint { x, y } if *x == 400.0 && y.abs() < 1e-9)
        };
        assert!(scene.primitives.iter().any(at_mean));
    }

    #[test]
    fn test_histogram_bars_follow_zoom() {
        let fx = Fixture::new();
        let bins = bin_histogram(&[0.0, 0.1, -0.2], fx.params.domain(4.0).unwrap(), 8).unwrap();
        let mut input = fx.input();
        input.histogram = Some(HistogramOverlay {
            bins: &bins,
            total: 3,
        });

        let plain: Vec<_> = render_scene(&input).bars().cloned().collect();
        input.transform = Transform::new(2.0, -400.0);
        let zoomed: Vec<_> = render_scene(&input).bars().cloned().collect();

        assert_eq!(plain.len(), 8);
        match (&plain[4], &zoomed[4]) {
            (
                Primitive::Bar { x: x0, width: w0, .. },
                Primitive::Bar { x: x1, width: w1, .. },
            ) => {
                assert_eq!(*x0, 400.0);
                assert_eq!(*x1, 400.0);
                assert_eq!(*w0, 99.0);
                assert_eq!(*w1, 199.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_tall_bars_clipped_to_top() {
        let fx = Fixture::new();
        let bins = bin_histogram(&[0.5; 10], fx.params.domain(4.0).unwrap(), 30).unwrap();
        let mut input = fx.input();
        input.histogram = Some(HistogramOverlay {
            bins: &bins,
            total: 10,
        });
        let scene = render_scene(&input);
        assert!(scene.bars().all(|b| matches!(b, Primitive::Bar { y, .. } if *y >= 0.0)));
    }

    #[test]
    fn test_zoom_moves_x_ticks_not_y() {
        let fx = Fixture::new();
        let mut input = fx.input();
        let plain = render_scene(&input);
        input.transform = Transform::new(2.0, -400.0);
        let zoomed = render_scene(&input);

        let y_plain: Vec<_> = plain.ticks(Orientation::Vertical).collect();
        let y_zoomed: Vec<_> = zoomed.ticks(Orientation::Vertical).collect();
        assert_eq!(y_plain, y_zoomed);

        let x_labels = |scene: &Scene| -> Vec<String> {
            scene
                .ticks(Orientation::Horizontal)
                .filter_map(|t| match t {
                    Primitive::Tick { label, .. } => Some(label.clone()),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(x_labels(&plain).first().map(String::as_str), Some("-4"));
        assert_eq!(x_labels(&zoomed).first().map(String::as_str), Some("-2.0"));
    }

    #[test]
    fn test_degenerate_viewport_is_empty() {
        let mut fx = Fixture::new();
        fx.viewport = Viewport::new(0.0, 0.0, Margins::default());
        let scene = render_scene(&fx.input());
        assert!(scene.is_empty());
        assert!(scene.aria_label.contains("Use arrow keys"));
    }
}
