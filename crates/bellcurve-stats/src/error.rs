//! Error types for bellcurve-stats

use thiserror::Error;

/// Errors raised by the math library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Statistics requested for a sample with no values
    #[error("Cannot compute statistics of an empty sample")]
    EmptySample,

    /// Standard deviation must be finite and strictly positive
    #[error("Standard deviation must be finite and > 0, got {std_dev}")]
    InvalidStdDev { std_dev: f64 },

    /// An input that must be finite was NaN or infinite
    #[error("Non-finite {what}")]
    NonFiniteInput { what: &'static str },

    /// Histograms need at least one bin
    #[error("Bin count must be at least 1")]
    InvalidBinCount,

    /// Curves need at least two points to span a domain
    #[error("Curve point count must be at least 2, got {count}")]
    InvalidPointCount { count: usize },

    /// Domain bounds must be finite with min < max
    #[error("Invalid domain [{min}, {max}]")]
    InvalidDomain { min: f64, max: f64 },
}

/// Result type alias for math library operations
pub type StatsResult<T> = Result<T, StatsError>;
