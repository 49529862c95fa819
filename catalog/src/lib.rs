//! Storefront catalog
//!
//! A fixed product catalog and the views storefront pages render from it:
//! featured selection, category partitions, blueprint coordinates and
//! editorial tiles.
//!
//! # Example
//!
//! ```
//! use catalog::{Catalog, Dataset, views};
//!
//! let catalog = Catalog::builtin(Dataset::Furniture).unwrap();
//! let top = views::select_featured(catalog.all(), 3);
//! assert_eq!(top.len(), 3);
//! assert_eq!(views::categories_of(catalog.all())[0], "bedrooms");
//! ```

pub mod error;
pub mod models;
pub mod session;
pub mod store;
pub mod validation;
pub mod views;

// Re-exports
pub use error::{CatalogError, CatalogResult, ErrorCode, Violation};
pub use models::{DatasetFile, Decoration, FeaturedPolicy, ProductRecord, TileSize};
pub use session::{Cart, Carousel, CategorySelection, MaterialSelection};
pub use store::{Catalog, Dataset};
