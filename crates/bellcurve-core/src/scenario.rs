//! Simulated datasets
//!
//! Three canned shapes for comparing a sample against the theoretical
//! curve: plain normal draws, draws with occasional outliers, and a
//! two-humped mixture.

use rand::Rng;
use serde::{Deserialize, Serialize};

use bellcurve_stats::{box_muller_sample, PostTransform};

use crate::error::{ExplorerError, ExplorerResult};

/// Kind of dataset to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationKind {
    /// Standard normal draws
    #[default]
    Normal,
    /// One draw in ten multiplied by 5
    Outliers,
    /// Each draw shifted by -2 or +2
    Bimodal,
}

impl SimulationKind {
    pub const ALL: [SimulationKind; 3] = [
        SimulationKind::Normal,
        SimulationKind::Outliers,
        SimulationKind::Bimodal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SimulationKind::Normal => "Normal",
            SimulationKind::Outliers => "With outliers",
            SimulationKind::Bimodal => "Bimodal",
        }
    }

    fn post_transform(&self) -> PostTransform {
        match self {
            SimulationKind::Normal => PostTransform::Identity,
            SimulationKind::Outliers => PostTransform::Outliers {
                probability: 0.1,
                factor: 5.0,
            },
            SimulationKind::Bimodal => PostTransform::Bimodal { offset: 2.0 },
        }
    }
}

/// Number of draws in a simulated dataset, 10 to 1000 in steps of 10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SampleSize(usize);

impl SampleSize {
    pub const MIN: usize = 10;
    pub const MAX: usize = 1000;
    pub const STEP: usize = 10;

    pub fn new(size: usize) -> ExplorerResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&size) || size % Self::STEP != 0 {
            return Err(ExplorerError::InvalidSampleSize {
                size,
                min: Self::MIN,
                max: Self::MAX,
                step: Self::STEP,
            });
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// One step larger, saturating at the maximum
    pub fn increased(&self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    /// One step smaller, saturating at the minimum
    pub fn decreased(&self) -> Self {
        Self(self.0.saturating_sub(Self::STEP).max(Self::MIN))
    }
}

impl Default for SampleSize {
    fn default() -> Self {
        Self(100)
    }
}

impl TryFrom<usize> for SampleSize {
    type Error = ExplorerError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<SampleSize> for usize {
    fn from(size: SampleSize) -> usize {
        size.0
    }
}

/// Draw a dataset of the given kind and size
pub fn simulate<R: Rng + ?Sized>(kind: SimulationKind, size: SampleSize, rng: &mut R) -> Vec<f64> {
    box_muller_sample(size.get(), kind.post_transform(), rng)
}
