//! Read-only catalog of real-world sample datasets
//!
//! The catalog is shipped as JSON next to the application:
//!
//! ```json
//! { "datasets": [
//!     { "id": "heights", "name": "Adult heights", "description": "...",
//!       "unit": "cm", "values": [170.2, 165.1] }
//! ] }
//! ```
//!
//! Nothing here writes the format back out.

use std::collections::HashSet;

use serde::Deserialize;

use bellcurve_stats::{sample_stats, SampleStats, StatsResult};

use crate::error::{CatalogError, CatalogResult, ExplorerError, ExplorerResult};

/// One dataset in the catalog
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SampleDataset {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub unit: Option<String>,
    pub values: Vec<f64>,
}

impl SampleDataset {
    /// Summary statistics of the dataset's finite values
    pub fn stats(&self) -> StatsResult<SampleStats> {
        sample_stats(&self.values)
    }

    /// Display name with the unit, e.g. "Adult heights (cm)"
    pub fn display_name(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} ({})", self.name, unit),
            None => self.name.clone(),
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    datasets: Vec<SampleDataset>,
}

/// Parsed and validated dataset catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetCatalog {
    datasets: Vec<SampleDataset>,
}

impl DatasetCatalog {
    /// Parse a catalog, rejecting duplicate ids and empty datasets
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for dataset in &file.datasets {
            if !seen.insert(dataset.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: dataset.id.clone(),
                });
            }
            if dataset.values.is_empty() {
                return Err(CatalogError::EmptyDataset {
                    id: dataset.id.clone(),
                });
            }
        }

        Ok(Self {
            datasets: file.datasets,
        })
    }

    pub fn get(&self, id: &str) -> ExplorerResult<&SampleDataset> {
        self.datasets
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| ExplorerError::DatasetNotFound { id: id.to_string() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SampleDataset> {
        self.datasets.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.datasets.iter().map(|d| d.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "datasets": [
            { "id": "a", "name": "Alpha", "description": "first", "unit": "kg",
              "values": [1.0, 2.0, 3.0] },
            { "id": "b", "name": "Beta", "description": "second",
              "values": [4.0] }
        ]
    }"#;

    #[test]
    fn test_parse_and_get() {
        let catalog = DatasetCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ids(), vec!["a", "b"]);

        let alpha = catalog.get("a").unwrap();
        assert_eq!(alpha.display_name(), "Alpha (kg)");
        assert_eq!(alpha.stats().unwrap().mean, 2.0);
        assert_eq!(catalog.get("b").unwrap().display_name(), "Beta");
    }

    #[test]
    fn test_missing_id() {
        let catalog = DatasetCatalog::from_json(CATALOG).unwrap();
        assert!(matches!(
            catalog.get("zzz"),
            Err(ExplorerError::DatasetNotFound { id }) if id == "zzz"
        ));
    }

    #[test]
    fn test_duplicate_id() {
        let json = r#"{ "datasets": [
            { "id": "x", "name": "X", "description": "", "values": [1] },
            { "id": "x", "name": "Y", "description": "", "values": [2] }
        ] }"#;
        assert!(matches!(
            DatasetCatalog::from_json(json),
            Err(CatalogError::DuplicateId { id }) if id == "x"
        ));
    }

    #[test]
    fn test_empty_dataset() {
        let json = r#"{ "datasets": [
            { "id": "x", "name": "X", "description": "", "values": [] }
        ] }"#;
        assert!(matches!(
            DatasetCatalog::from_json(json),
            Err(CatalogError::EmptyDataset { .. })
        ));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            DatasetCatalog::from_json("{ \"datasets\": 3 }"),
            Err(CatalogError::Parse(_))
        ));
    }
}
