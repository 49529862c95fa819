//! Derived views
//!
//! Pure, infallible functions over a borrowed record list:
//!
//! - [`featured`]: ranked top-K and flag selection
//! - [`category`]: category labels and partitions
//! - [`layout`]: deterministic coordinates and tile spans
//! - [`theme`]: per-theme view models

pub mod category;
pub mod featured;
pub mod layout;
pub mod theme;

pub use category::{CategoryIndex, categories_of, distinct_by, filter_by_category};
pub use featured::{FeaturedSet, select_featured, select_flagged, select_ranked};
pub use layout::{Coordinates, TileSpan, coordinate_for};
pub use theme::{
    BlueprintItem, EditorialTile, blueprint_items, editorial_tiles, filter_by_material,
    materials_of,
};
