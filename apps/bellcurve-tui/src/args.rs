//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

use bellcurve_core::{ChartConfig, DatasetCatalog};

/// Interactive normal distribution explorer for the terminal
#[derive(Parser, Clone, Debug)]
#[command(name = "bellcurve")]
#[command(about = "Explore the normal distribution, sample datasets and misleading charts")]
pub struct Args {
    /// Chart configuration (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sample dataset catalog (JSON)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Initial mean
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub mean: f64,

    /// Initial standard deviation
    #[arg(long, default_value = "1")]
    pub std_dev: f64,

    /// Seed for simulated datasets, random when omitted
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn load_config(&self) -> Result<ChartConfig, Box<dyn std::error::Error>> {
        match &self.config {
            Some(path) => Ok(ChartConfig::from_toml(&std::fs::read_to_string(path)?)?),
            None => Ok(ChartConfig::default()),
        }
    }

    pub fn load_catalog(&self) -> Result<DatasetCatalog, Box<dyn std::error::Error>> {
        match &self.catalog {
            Some(path) => Ok(DatasetCatalog::from_json(&std::fs::read_to_string(path)?)?),
            None => Ok(DatasetCatalog::default()),
        }
    }
}
