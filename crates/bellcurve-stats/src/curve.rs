//! Domain intervals and the discretized PDF polyline

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::normal::DistributionParams;

/// Number of points used to approximate the density curve
pub const DEFAULT_CURVE_POINTS: usize = 100;

/// Closed data-space interval `[min, max]` with `min < max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// Create a domain, rejecting empty, reversed, or non-finite bounds
    pub fn new(min: f64, max: f64) -> StatsResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(StatsError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }

    /// Nearest value inside the domain
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }

    /// Value at fraction `t` of the way from `min` to `max`
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + t * self.width()
    }
}

/// One vertex of the density polyline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

/// Evaluate the PDF at `point_count` evenly spaced positions across `domain`.
///
/// The first and last points sit exactly on the domain bounds.
pub fn sample_curve(
    domain: Domain,
    params: &DistributionParams,
    point_count: usize,
) -> StatsResult<Vec<CurvePoint>> {
    if point_count < 2 {
        return Err(StatsError::InvalidPointCount { count: point_count });
    }

    let last = point_count - 1;
    let points = (0..point_count)
        .map(|i| {
            let x = if i == last {
                domain.max()
            } else {
                domain.lerp(i as f64 / last as f64)
            };
            CurvePoint {
                x,
                y: params.pdf(x),
            }
        })
        .collect();

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_rejects_reversed() {
        assert!(Domain::new(1.0, 1.0).is_err());
        assert!(Domain::new(2.0, 1.0).is_err());
        assert!(Domain::new(f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_domain_clamp() {
        let domain = Domain::new(-4.0, 4.0).unwrap();
        assert_eq!(domain.clamp(10.0), 4.0);
        assert_eq!(domain.clamp(-10.0), -4.0);
        assert_eq!(domain.clamp(1.5), 1.5);
    }

    #[test]
    fn test_curve_spans_domain() {
        let params = DistributionParams::standard();
        let domain = params.domain(4.0).unwrap();
        let curve = sample_curve(domain, &params, DEFAULT_CURVE_POINTS).unwrap();

        assert_eq!(curve.len(), 100);
        assert_eq!(curve[0].x, -4.0);
        assert_eq!(curve[99].x, 4.0);
        assert!(curve.windows(2).all(|w| w[0].x < w[1].x));
        assert!(curve.iter().all(|p| p.y >= 0.0));
    }

    #[test]
    fn test_curve_is_deterministic() {
        let params = DistributionParams::new(1.0, 0.5).unwrap();
        let domain = params.domain(4.0).unwrap();
        assert_eq!(
            sample_curve(domain, &params, 50).unwrap(),
            sample_curve(domain, &params, 50).unwrap()
        );
    }

    #[test]
    fn test_curve_needs_two_points() {
        let params = DistributionParams::standard();
        let domain = params.domain(4.0).unwrap();
        assert_eq!(
            sample_curve(domain, &params, 1),
            Err(StatsError::InvalidPointCount { count: 1 })
        );
    }
}
