//! Misleading-visualization gallery
//!
//! Side-by-side examples of the same data drawn honestly and drawn to
//! mislead. Each scene uses the ordinary render primitives, so any backend
//! that can paint the explorer can paint the gallery.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use bellcurve_stats::{bin_histogram, box_muller_sample, Domain, PostTransform};

use crate::axis::{calculate_ticks, Orientation};
use crate::mapper::LinearScale;
use crate::render::{Primitive, Scene, POINT_RADIUS};
use crate::view::Viewport;

const AXIS_SERIES: [f64; 6] = [10.0, 10.2, 10.1, 10.3, 10.2, 10.4];
const TREND_SERIES: [f64; 10] = [2.0, 4.0, 3.0, 5.0, 4.0, 6.0, 5.0, 7.0, 6.0, 8.0];
const CHERRY_PICKED_LEN: usize = 5;

const LARGE_SAMPLE: usize = 1000;
const SMALL_SAMPLE: usize = 10;
const SAMPLE_BINS: usize = 16;
const SAMPLE_RANGE: (f64, f64) = (-4.0, 4.0);

const BAR_GAP: f64 = 1.0;
const X_TICK_TARGET: usize = 10;
const Y_TICK_TARGET: usize = 5;

/// One gallery entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MisleadingScenario {
    /// A truncated y axis exaggerates small changes
    #[default]
    AxisManipulation,
    /// Ten draws look nothing like the population
    SampleSize,
    /// Dropping the later half hides the trend
    CherryPicking,
}

/// Which side of the comparison to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    Correct,
    Misleading,
}

impl MisleadingScenario {
    pub const ALL: [MisleadingScenario; 3] = [
        MisleadingScenario::AxisManipulation,
        MisleadingScenario::SampleSize,
        MisleadingScenario::CherryPicking,
    ];

    /// The following entry, wrapping around
    pub fn next(self) -> Self {
        match self {
            MisleadingScenario::AxisManipulation => MisleadingScenario::SampleSize,
            MisleadingScenario::SampleSize => MisleadingScenario::CherryPicking,
            MisleadingScenario::CherryPicking => MisleadingScenario::AxisManipulation,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MisleadingScenario::AxisManipulation => "Axis Manipulation",
            MisleadingScenario::SampleSize => "Small Sample Size",
            MisleadingScenario::CherryPicking => "Cherry-Picked Data",
        }
    }

    pub fn correct(&self) -> &'static str {
        match self {
            MisleadingScenario::AxisManipulation => {
                "Standard axis scaling shows the true relationship"
            }
            MisleadingScenario::SampleSize => "Large sample size (n=1000) shows true distribution",
            MisleadingScenario::CherryPicking => "Complete dataset shows actual trends",
        }
    }

    pub fn misleading(&self) -> &'static str {
        match self {
            MisleadingScenario::AxisManipulation => {
                "Manipulated axis makes small differences look dramatic"
            }
            MisleadingScenario::SampleSize => "Small sample size (n=10) gives misleading picture",
            MisleadingScenario::CherryPicking => "Selected data points suggest different pattern",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            MisleadingScenario::AxisManipulation => {
                "Changing axis scales can make small differences appear more significant \
                 than they are, leading to misinterpretation of data trends."
            }
            MisleadingScenario::SampleSize => {
                "Small sample sizes can lead to unreliable conclusions about the underlying \
                 population distribution."
            }
            MisleadingScenario::CherryPicking => {
                "Selecting specific data points while ignoring others can create a false \
                 narrative that doesn't represent the true relationship."
            }
        }
    }

    /// Caption for one side of the comparison
    pub fn caption(&self, presentation: Presentation) -> &'static str {
        match presentation {
            Presentation::Correct => self.correct(),
            Presentation::Misleading => self.misleading(),
        }
    }
}

/// Render one side of a gallery comparison
pub fn comparison_scene<R: Rng + ?Sized>(
    scenario: MisleadingScenario,
    presentation: Presentation,
    viewport: &Viewport,
    rng: &mut R,
) -> Scene {
    let label = format!("{}: {}", scenario.title(), scenario.caption(presentation));
    if viewport.is_degenerate() {
        warn!(?scenario, "degenerate viewport, nothing to render");
        return Scene::empty(viewport, label);
    }
    let (width, height) = (viewport.plot_width(), viewport.plot_height());

    let primitives = match (scenario, presentation) {
        (MisleadingScenario::AxisManipulation, Presentation::Correct) => {
            series(&AXIS_SERIES, (0.0, 15.0), width, height, false)
        }
        (MisleadingScenario::AxisManipulation, Presentation::Misleading) => {
            series(&AXIS_SERIES, (9.9, 10.5), width, height, false)
        }
        (MisleadingScenario::SampleSize, Presentation::Correct) => {
            sample_histogram(LARGE_SAMPLE, width, height, rng)
        }
        (MisleadingScenario::SampleSize, Presentation::Misleading) => {
            sample_histogram(SMALL_SAMPLE, width, height, rng)
        }
        (MisleadingScenario::CherryPicking, Presentation::Correct) => {
            series(&TREND_SERIES, (0.0, 10.0), width, height, true)
        }
        (MisleadingScenario::CherryPicking, Presentation::Misleading) => series(
            &TREND_SERIES[..CHERRY_PICKED_LEN],
            (0.0, 10.0),
            width,
            height,
            true,
        ),
    };

    Scene {
        width: viewport.width,
        height: viewport.height,
        origin: viewport.origin(),
        plot_width: width,
        plot_height: height,
        primitives: primitives.unwrap_or_default(),
        aria_label: label,
    }
}

/// Line chart of `values` against their index
fn series(
    values: &[f64],
    y_domain: (f64, f64),
    width: f64,
    height: f64,
    dots: bool,
) -> Option<Vec<Primitive>> {
    let last = values.len().checked_sub(1)? as f64;
    let x = LinearScale::new((0.0, last), (0.0, width))?;
    let y = LinearScale::vertical(y_domain.0, y_domain.1, height)?;

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| (x.map(i as f64), y.map(*v)))
        .collect();

    let mut primitives = vec![Primitive::Path {
        points: points.clone(),
    }];
    if dots {
        primitives.extend(points.iter().map(|&(px, py)| Primitive::Dot {
            x: px,
            y: py,
            radius: POINT_RADIUS,
        }));
    }
    primitives.extend(ticks(&x, &y));
    Some(primitives)
}

/// Count histogram of `n` standard normal draws
fn sample_histogram<R: Rng + ?Sized>(
    n: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Option<Vec<Primitive>> {
    let draws = box_muller_sample(n, PostTransform::Identity, rng);
    let domain = Domain::new(SAMPLE_RANGE.0, SAMPLE_RANGE.1).ok()?;
    let bins = bin_histogram(&draws, domain, SAMPLE_BINS).ok()?;
    let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);

    let x = LinearScale::new(SAMPLE_RANGE, (0.0, width))?;
    let y = LinearScale::vertical(0.0, max_count as f64, height)?;

    let mut primitives: Vec<Primitive> = bins
        .iter()
        .map(|bin| {
            let left = x.map(bin.x0);
            let top = y.map(bin.count as f64);
            Primitive::Bar {
                x: left,
                y: top,
                width: (x.map(bin.x1) - left - BAR_GAP).max(0.0),
                height: height - top,
                count: bin.count,
            }
        })
        .collect();
    primitives.extend(ticks(&x, &y));
    Some(primitives)
}

fn ticks(x: &LinearScale, y: &LinearScale) -> Vec<Primitive> {
    let (x0, x1) = x.domain();
    let (y0, y1) = y.domain();
    let horizontal = calculate_ticks(x0, x1, X_TICK_TARGET)
        .into_iter()
        .map(|t| Primitive::Tick {
            orientation: Orientation::Horizontal,
            position: x.map(t.value),
            label: t.label,
        });
    let vertical = calculate_ticks(y0, y1, Y_TICK_TARGET)
        .into_iter()
        .map(|t| Primitive::Tick {
            orientation: Orientation::Vertical,
            position: y.map(t.value),
            label: t.label,
        });
    horizontal.chain(vertical).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Margins;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn viewport() -> Viewport {
        Viewport::new(600.0, 200.0, Margins::default())
    }

    fn scene(scenario: MisleadingScenario, presentation: Presentation) -> Scene {
        comparison_scene(
            scenario,
            presentation,
            &viewport(),
            &mut StdRng::seed_from_u64(99),
        )
    }

    #[test]
    fn test_next_cycles() {
        let mut s = MisleadingScenario::default();
        for _ in 0..3 {
            s = s.next();
        }
        assert_eq!(s, MisleadingScenario::AxisManipulation);
        assert_eq!(
            MisleadingScenario::SampleSize.next(),
            MisleadingScenario::CherryPicking
        );
    }

    #[test]
    fn test_axis_manipulation_exaggerates() {
        let spread = |presentation| {
            let scene = scene(MisleadingScenario::AxisManipulation, presentation);
            let points = scene.curve().unwrap().to_vec();
            let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
            let max = ys.iter().copied().fold(f64::MIN, f64::max);
            let min = ys.iter().copied().fold(f64::MAX, f64::min);
            max - min
        };
        let honest = spread(Presentation::Correct);
        let dramatic = spread(Presentation::Misleading);
        assert!(dramatic > 10.0 * honest);
    }

    #[test]
    fn test_sample_size_bars() {
        let large = scene(MisleadingScenario::SampleSize, Presentation::Correct);
        let small = scene(MisleadingScenario::SampleSize, Presentation::Misleading);

        let total = |scene: &Scene| {
            scene
                .bars()
                .map(|b| match b {
                    Primitive::Bar { count, .. } => *count,
                    _ => 0,
                })
                .sum::<usize>()
        };
        assert_eq!(large.bars().count(), 16);
        assert!(total(&large) >= 995);
        assert!(total(&small) <= 10);
        // Tallest bar reaches the top of the plot
        assert!(large
            .bars()
            .any(|b| matches!(b, Primitive::Bar { y, .. } if *y == 0.0)));
    }

    #[test]
    fn test_cherry_picking_dots() {
        let full = scene(MisleadingScenario::CherryPicking, Presentation::Correct);
        let picked = scene(MisleadingScenario::CherryPicking, Presentation::Misleading);
        let dots = |scene: &Scene| {
            scene
                .primitives
                .iter()
                .filter(|p| matches!(p, Primitive::Dot { .. }))
                .count()
        };
        assert_eq!(dots(&full), 10);
        assert_eq!(dots(&picked), 5);
        // Both span the full plot width
        assert_eq!(picked.curve().unwrap().last().unwrap().0, 600.0);
    }

    #[test]
    fn test_captions() {
        let s = MisleadingScenario::SampleSize;
        assert!(s.caption(Presentation::Correct).contains("n=1000"));
        assert!(s.caption(Presentation::Misleading).contains("n=10"));
        let scene = scene(s, Presentation::Misleading);
        assert!(scene.aria_label.starts_with("Small Sample Size: "));
    }

    #[test]
    fn test_degenerate_viewport() {
        let vp = Viewport::new(10.0, 10.0, Margins {
            top: 20.0,
            ..Margins::default()
        });
        let scene = comparison_scene(
            MisleadingScenario::CherryPicking,
            Presentation::Correct,
            &vp,
            &mut StdRng::seed_from_u64(1),
        );
        assert!(scene.is_empty());
    }
}
