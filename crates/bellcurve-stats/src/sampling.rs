//! Random normal deviates via the Box–Muller transform
//!
//! The random source is always passed in, so a seeded `StdRng` gives
//! reproducible samples in tests while callers can use `thread_rng()`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Smallest first uniform accepted, keeps `ln(u1)` finite
const MIN_UNIFORM: f64 = 1e-12;

/// Per-draw rule applied to each standard normal deviate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum PostTransform {
    /// Leave the deviate as N(0, 1)
    #[default]
    Identity,

    /// `z · scale + shift`
    Affine { scale: f64, shift: f64 },

    /// With the given probability, multiply the deviate by `factor`
    Outliers { probability: f64, factor: f64 },

    /// Shift the deviate by `-offset` or `+offset` with equal probability
    Bimodal { offset: f64 },
}

impl PostTransform {
    /// Apply the rule to one deviate, drawing extra uniforms for mixtures
    pub fn apply<R: Rng + ?Sized>(&self, z: f64, rng: &mut R) -> f64 {
        match *self {
            PostTransform::Identity => z,
            PostTransform::Affine { scale, shift } => z * scale + shift,
            PostTransform::Outliers {
                probability,
                factor,
            } => {
                if rng.gen::<f64>() < probability {
                    z * factor
                } else {
                    z
                }
            }
            PostTransform::Bimodal { offset } => {
                if rng.gen::<f64>() < 0.5 {
                    z - offset
                } else {
                    z + offset
                }
            }
        }
    }
}

/// One standard normal deviate: `sqrt(-2 ln u1) · cos(2π u2)`
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1 = rng.gen::<f64>().max(MIN_UNIFORM); // Avoid ln(0)
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Generate `n` independent deviates, each passed through `transform`
pub fn box_muller_sample<R: Rng + ?Sized>(
    n: usize,
    transform: PostTransform,
    rng: &mut R,
) -> Vec<f64> {
    (0..n)
        .map(|_| {
            let z = standard_normal(rng);
            transform.apply(z, rng)
        })
        .collect()
}
