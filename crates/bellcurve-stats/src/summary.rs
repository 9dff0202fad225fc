//! Summary statistics for samples
//!
//! Population moments (divide by `n`, not `n - 1`), used when a caller wants
//! to fit the displayed curve to a loaded or simulated dataset.

use serde::{Deserialize, Serialize};

use crate::error::{StatsError, StatsResult};
use crate::normal::DistributionParams;

/// Summary statistics for a numeric sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleStats {
    /// Number of finite values
    pub count: usize,
    /// Number of NaN/infinite values that were skipped
    pub missing: usize,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Population mean
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl SampleStats {
    /// Compute summary statistics from data.
    ///
    /// Non-finite values are skipped and counted in `missing`. A sample with
    /// no finite values is an error rather than a row of NaNs.
    pub fn from_data(data: &[f64]) -> StatsResult<Self> {
        let finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        let missing = data.len() - finite.len();

        if finite.is_empty() {
            return Err(StatsError::EmptySample);
        }

        let count = finite.len();
        let mean = finite.iter().sum::<f64>() / count as f64;
        let variance = finite.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            count,
            missing,
            min,
            max,
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }

    /// Get the range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Normal distribution with this sample's mean and standard deviation.
    ///
    /// Fails with `InvalidStdDev` when every value is identical.
    pub fn to_params(&self) -> StatsResult<DistributionParams> {
        DistributionParams::new(self.mean, self.std_dev)
    }
}

/// Population mean and standard deviation of a sample
pub fn sample_stats(sample: &[f64]) -> StatsResult<SampleStats> {
    SampleStats::from_data(sample)
}
