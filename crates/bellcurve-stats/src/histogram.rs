//! Equal-width histogram binning over a fixed domain

use serde::{Deserialize, Serialize};

use crate::curve::Domain;
use crate::error::{StatsError, StatsResult};

/// Number of bins drawn behind the density curve
pub const DEFAULT_BIN_COUNT: usize = 30;

/// One histogram bucket covering `[x0, x1)` (the last bucket is `[x0, x1]`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    pub count: usize,
}

impl Bin {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Count normalized so the histogram integrates to one over `total` values
    pub fn density(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.count as f64 / (total as f64 * self.width())
    }
}

/// Bin `sample` into `bin_count` equal-width buckets covering `domain`.
///
/// Buckets are closed-open except the last, which also holds `domain.max()`.
/// Values outside the domain and non-finite values are dropped. An empty
/// sample gives all-zero bins.
pub fn bin_histogram(sample: &[f64], domain: Domain, bin_count: usize) -> StatsResult<Vec<Bin>> {
    if bin_count == 0 {
        return Err(StatsError::InvalidBinCount);
    }

    let edges: Vec<f64> = (0..=bin_count)
        .map(|i| {
            if i == bin_count {
                domain.max()
            } else {
                domain.lerp(i as f64 / bin_count as f64)
            }
        })
        .collect();

    let mut bins: Vec<Bin> = edges
        .windows(2)
        .map(|w| Bin {
            x0: w[0],
            x1: w[1],
            count: 0,
        })
        .collect();

    for &x in sample {
        if !x.is_finite() || !domain.contains(x) {
            continue;
        }
        bins[bucket_index(x, &edges, domain)].count += 1;
    }

    Ok(bins)
}

/// Index of the bucket holding an in-domain `x`.
///
/// The arithmetic guess can land one bucket off when `x` sits on an edge, so
/// it is corrected against the stored edges.
fn bucket_index(x: f64, edges: &[f64], domain: Domain) -> usize {
    let n = edges.len() - 1;
    let guess = ((x - domain.min()) / domain.width() * n as f64).floor();
    let mut idx = (guess.max(0.0) as usize).min(n - 1);

    if idx > 0 && x < edges[idx] {
        idx -= 1;
    } else if idx + 1 < n && x >= edges[idx + 1] {
        idx += 1;
    }
    idx
}
