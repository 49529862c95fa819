use std::path::PathBuf;

use catalog::store::UnknownDataset;
use catalog::{CategorySelection, Dataset};

/// Storefront configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | STOREFRONT_DATASET | furniture | Built-in dataset (furniture, editorial, blueprint) |
/// | CATALOG_PATH | - | Dataset JSON file, overrides the built-in dataset |
/// | FEATURED_LIMIT | - | Overrides the dataset's ranked featured limit |
/// | CATEGORY | all | Category selection for the visible list |
/// | LOG_LEVEL | info | Log filter |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | - | Daily rolling log file directory |
///
/// # Example
///
/// ```ignore
/// STOREFRONT_DATASET=blueprint LOG_LEVEL=debug cargo run -p storefront
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub dataset: Dataset,
    pub catalog_path: Option<PathBuf>,
    pub featured_limit: Option<usize>,
    pub category: CategorySelection,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, UnknownDataset> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable source
    ///
    /// Unparseable numbers and booleans fall back to their defaults; an
    /// unknown dataset name is an error.
    pub fn from_vars<F>(var: F) -> Result<Self, UnknownDataset>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let dataset = match non_empty("STOREFRONT_DATASET") {
            Some(name) => name.parse::<Dataset>()?,
            None => Dataset::Furniture,
        };

        Ok(Self {
            dataset,
            catalog_path: non_empty("CATALOG_PATH").map(PathBuf::from),
            featured_limit: non_empty("FEATURED_LIMIT").and_then(|v| v.trim().parse().ok()),
            category: non_empty("CATEGORY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or_default(),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: non_empty("LOG_JSON")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(false),
            log_dir: non_empty("LOG_DIR"),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: Dataset::Furniture,
            catalog_path: None,
            featured_limit: None,
            category: CategorySelection::All,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}
