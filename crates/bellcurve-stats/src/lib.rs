//! bellcurve-stats - Numerical core for the normal distribution explorer
//!
//! This crate provides the pure functions behind the explorer:
//!
//! - **Normal**: Gaussian PDF, error function, percentile (CDF × 100)
//! - **Summary**: population mean and standard deviation of a sample
//! - **Sampling**: Box–Muller deviates from an injected random source
//! - **Curve**: evenly spaced PDF polyline over a domain
//! - **Histogram**: equal-width binning over a domain
//!
//! Everything here is deterministic given its inputs. Randomness only enters
//! through the `rand::Rng` passed to the sampling functions.

pub mod curve;
pub mod error;
pub mod histogram;
pub mod normal;
pub mod sampling;
pub mod summary;

pub use curve::*;
pub use error::*;
pub use histogram::*;
pub use normal::*;
pub use sampling::*;
pub use summary::*;
