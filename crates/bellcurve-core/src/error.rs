//! Error types for bellcurve-core
//!
//! Every failure in the explorer is local and recoverable. The worst
//! outcome of any error is an unchanged state or an empty scene.

use bellcurve_stats::StatsError;
use thiserror::Error;

/// Main error type for explorer operations
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Math library rejected its input
    #[error("Statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Dataset catalog errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Simulated sample size outside the supported range
    #[error("Sample size {size} must be between {min} and {max} in steps of {step}")]
    InvalidSampleSize {
        size: usize,
        min: usize,
        max: usize,
        step: usize,
    },

    /// Dataset id not present in the catalog
    #[error("Dataset '{id}' not found in catalog")]
    DatasetNotFound { id: String },
}

/// Errors related to chart configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// TOML could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML could not be written
    #[error("TOML serialization error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    /// JSON could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

/// Errors related to the dataset catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog JSON is malformed
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two datasets share an id
    #[error("Duplicate dataset id '{id}'")]
    DuplicateId { id: String },

    /// A dataset has no values
    #[error("Dataset '{id}' has no values")]
    EmptyDataset { id: String },
}

/// Result type alias for explorer operations
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Result type alias for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
