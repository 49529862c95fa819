//! Data models
//!
//! Canonical product records, per-theme decorations and the dataset file
//! that carries both. All ids are `u32`.

pub mod dataset;
pub mod decoration;
pub mod product;

// Re-exports
pub use dataset::*;
pub use decoration::*;
pub use product::*;
