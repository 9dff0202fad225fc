//! Data ↔ pixel coordinate mapping
//!
//! [`LinearScale`] is a plain interval-to-interval map. [`XMapper`] layers
//! the pan/zoom [`Transform`] on top of it for the x axis; the y axis uses
//! a bare scale from `[0, peak]` onto `[height, 0]`.

use bellcurve_stats::{DistributionParams, Domain};

use crate::view::Transform;

/// Linear map from a data interval onto a pixel interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    /// Map `[d0, d1]` onto `[r0, r1]`.
    ///
    /// Returns `None` when either interval is empty or non-finite, so no
    /// caller can divide by a zero width.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Option<Self> {
        let (d0, d1) = domain;
        let (r0, r1) = range;
        let finite = [d0, d1, r0, r1].iter().all(|v| v.is_finite());
        if !finite || d0 == d1 || r0 == r1 {
            return None;
        }
        Some(Self { d0, d1, r0, r1 })
    }

    /// Vertical scale with `lo` at the bottom (`height`) and `hi` at the top
    pub fn vertical(lo: f64, hi: f64, height: f64) -> Option<Self> {
        Self::new((lo, hi), (height, 0.0))
    }

    pub fn map(&self, value: f64) -> f64 {
        self.r0 + (value - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        self.d0 + (pixel - self.r0) / (self.r1 - self.r0) * (self.d1 - self.d0)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    pub fn range(&self) -> (f64, f64) {
        (self.r0, self.r1)
    }
}

/// x-axis mapper: domain onto `[0, range_width]`, then the zoom transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XMapper {
    scale: LinearScale,
    transform: Transform,
}

impl XMapper {
    /// `None` when `range_width` is not positive or the transform cannot be
    /// inverted
    pub fn new(domain: Domain, range_width: f64, transform: Transform) -> Option<Self> {
        if !(range_width > 0.0) || !(transform.scale > 0.0) || !transform.translate_x.is_finite()
        {
            return None;
        }
        let scale = LinearScale::new((domain.min(), domain.max()), (0.0, range_width))?;
        Some(Self { scale, transform })
    }

    pub fn to_pixel(&self, data_x: f64) -> f64 {
        self.transform.apply(self.scale.map(data_x))
    }

    pub fn to_data(&self, pixel_x: f64) -> f64 {
        self.scale.invert(self.transform.invert(pixel_x))
    }

    /// Data interval currently visible across `[0, range_width]`
    pub fn visible(&self) -> (f64, f64) {
        let (_, width) = self.scale.range();
        (self.to_data(0.0), self.to_data(width))
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }
}

/// y-axis mapper from density `[0, peak]` onto `[range_height, 0]`.
///
/// Independent of the zoom transform.
pub fn density_scale(params: &DistributionParams, range_height: f64) -> Option<LinearScale> {
    if !(range_height > 0.0) {
        return None;
    }
    LinearScale::vertical(0.0, params.peak(), range_height)
}
