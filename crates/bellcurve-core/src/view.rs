//! View geometry: the x-axis pan/zoom transform and the plot viewport
//!
//! The transform only ever touches the x axis. The y axis keeps the
//! density scale no matter how far the user zooms.

use serde::{Deserialize, Serialize};

/// Affine remapping of pixel x: `px · scale + translate_x`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale: f64,
    pub translate_x: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        translate_x: 0.0,
    };

    pub fn new(scale: f64, translate_x: f64) -> Self {
        Self { scale, translate_x }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Apply to an untransformed pixel x
    pub fn apply(&self, px: f64) -> f64 {
        px * self.scale + self.translate_x
    }

    /// Undo [`Transform::apply`]
    pub fn invert(&self, px: f64) -> f64 {
        (px - self.translate_x) / self.scale
    }

    /// Zoom by `factor` keeping the screen position `anchor` fixed.
    ///
    /// The resulting scale is clamped to `[min_scale, max_scale]`; the
    /// translation is adjusted by the ratio actually applied. A non-finite
    /// anchor or factor, or a result that is no longer finite, leaves the
    /// transform unchanged.
    pub fn zoomed_about(&self, anchor: f64, factor: f64, min_scale: f64, max_scale: f64) -> Self {
        if !anchor.is_finite() || !factor.is_finite() || factor <= 0.0 {
            return *self;
        }
        let scale = (self.scale * factor).clamp(min_scale, max_scale);
        let ratio = scale / self.scale;
        Self {
            scale,
            translate_x: anchor - (anchor - self.translate_x) * ratio,
        }
        .or(*self)
    }

    /// Shift horizontally by `dx` pixels; ignored if the result would not be finite
    pub fn panned(&self, dx: f64) -> Self {
        Self {
            scale: self.scale,
            translate_x: self.translate_x + dx,
        }
        .or(*self)
    }

    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.translate_x.is_finite()
    }

    fn or(self, fallback: Self) -> Self {
        if self.is_finite() {
            self
        } else {
            fallback
        }
    }
}

/// Space reserved around the plot for axes and labels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Rendering surface size with its plot margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Viewport {
    pub fn new(width: f64, height: f64, margins: Margins) -> Self {
        Self {
            width,
            height,
            margins,
        }
    }

    /// Width of the plot area inside the margins
    pub fn plot_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    /// Height of the plot area inside the margins
    pub fn plot_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// True when there is no drawable plot area
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = (self.plot_width(), self.plot_height());
        !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0)
    }

    /// Top-left corner of the plot area in surface pixels
    pub fn origin(&self) -> (f64, f64) {
        (self.margins.left, self.margins.top)
    }

    /// Convert surface pixels to plot-relative pixels
    pub fn to_plot(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.margins.left, y - self.margins.top)
    }

    /// Whether a surface pixel lies inside the plot area
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (px, py) = self.to_plot(x, y);
        px >= 0.0 && px <= self.plot_width() && py >= 0.0 && py <= self.plot_height()
    }
}
