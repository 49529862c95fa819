//! Storefront catalog runner
//!
//! Loads a catalog according to [`Config`], validates it and renders every
//! derived view as a JSON [`Snapshot`].
//!
//! # Module layout
//!
//! ```text
//! storefront/src/
//! ├── config.rs    # environment configuration
//! ├── logger.rs    # tracing setup
//! └── snapshot.rs  # serializable view bundle
//! ```

pub mod config;
pub mod logger;
pub mod snapshot;

pub use config::Config;
pub use logger::init_logger_with_file;
pub use snapshot::Snapshot;

use catalog::{Catalog, CatalogResult};

/// Load the catalog selected by `config`.
///
/// `catalog_path` takes precedence over the built-in dataset.
pub fn load_catalog(config: &Config) -> CatalogResult<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading catalog from file");
            Catalog::from_path(path)
        }
        None => {
            tracing::info!(dataset = %config.dataset, "Loading built-in catalog");
            Catalog::builtin(config.dataset)
        }
    }
}
