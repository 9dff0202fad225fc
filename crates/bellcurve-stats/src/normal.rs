//! Normal (Gaussian) distribution
//!
//! Density, error function and percentile lookups. The error function uses
//! the Chebyshev-fitted complementary error function with
//! `t = 1 / (1 + 0.5·|x|)`, accurate to about 1.2e-7 everywhere. Percentiles
//! shown to the user are derived from it, so the coefficients must not be
//! changed. Only the exponent is pinned so that `erf(0) = 0` exactly.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, SQRT_2};

use crate::curve::Domain;
use crate::error::{StatsError, StatsResult};

/// Parameters of a normal distribution.
///
/// Construction validates `std_dev`, so every method is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributionParams {
    mean: f64,
    std_dev: f64,
}

impl DistributionParams {
    /// Create parameters, rejecting a non-positive or non-finite `std_dev`
    pub fn new(mean: f64, std_dev: f64) -> StatsResult<Self> {
        if !mean.is_finite() {
            return Err(StatsError::NonFiniteInput { what: "mean" });
        }
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(StatsError::InvalidStdDev { std_dev });
        }
        Ok(Self { mean, std_dev })
    }

    /// The standard normal N(0, 1)
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            std_dev: 1.0,
        }
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// z-score of `x`
    pub fn zscore(&self, x: f64) -> f64 {
        (x - self.mean) / self.std_dev
    }

    /// Probability density at `x`
    pub fn pdf(&self, x: f64) -> f64 {
        let z = self.zscore(x);
        (-0.5 * z * z).exp() / (self.std_dev * (2.0 * PI).sqrt())
    }

    /// Density at the mean, the tallest point of the curve
    pub fn peak(&self) -> f64 {
        self.pdf(self.mean)
    }

    /// Cumulative probability P(X <= x), in [0, 1]
    pub fn cdf(&self, x: f64) -> f64 {
        (1.0 + erf(self.zscore(x) / SQRT_2)) / 2.0
    }

    /// Cumulative probability as a percentage, in [0, 100]
    pub fn percentile(&self, x: f64) -> f64 {
        100.0 * self.cdf(x)
    }

    /// Value `multiple` standard deviations away from the mean
    pub fn at_sigma(&self, multiple: f64) -> f64 {
        self.mean + multiple * self.std_dev
    }

    /// Visualized interval `[mean - k·σ, mean + k·σ]`
    pub fn domain(&self, sigmas: f64) -> StatsResult<Domain> {
        Domain::new(self.at_sigma(-sigmas), self.at_sigma(sigmas))
    }
}

impl Default for DistributionParams {
    fn default() -> Self {
        Self::standard()
    }
}

/// Probability density of N(mean, std_dev) at `x`
pub fn pdf(x: f64, mean: f64, std_dev: f64) -> StatsResult<f64> {
    Ok(DistributionParams::new(mean, std_dev)?.pdf(x))
}

/// Percentile (0–100) of `x` under N(mean, std_dev)
pub fn percentile(x: f64, mean: f64, std_dev: f64) -> StatsResult<f64> {
    Ok(DistributionParams::new(mean, std_dev)?.percentile(x))
}

/// Error function.
///
/// Odd by construction: the approximation is evaluated on `|x|` and the sign
/// restored afterwards. The exponent is shifted by `erfc_poly(1)·t` so that
/// `erfc(0)` is exactly one; the shift is below 3e-8 and keeps `erf`
/// continuous and increasing through zero.
pub fn erf(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let erfc = t * (-z * z + erfc_poly(t) - erfc_poly(1.0) * t).exp();
    if x > 0.0 {
        1.0 - erfc
    } else {
        erfc - 1.0
    }
}

#[inline]
fn erfc_poly(t: f64) -> f64 {
    -1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))))
}

/// Percentage of the distribution within `n` standard deviations of the mean.
///
/// Equal to `2·percentile(mean + |n|·σ) − 100`; the sign of `n` is ignored.
pub fn sigma_coverage(n: f64) -> f64 {
    erf(n.abs() / SQRT_2) * 100.0
}
