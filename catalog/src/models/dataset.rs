//! Dataset file format
//!
//! A dataset is the authored, on-disk form of a catalog:
//!
//! ```json
//! {
//!   "name": "furniture",
//!   "featured": { "policy": "top_reviewed", "limit": 6 },
//!   "products": [ ... ],
//!   "decorations": [ ... ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::{Decoration, ProductRecord};

/// Default size of a ranked featured set
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// How a dataset chooses its featured products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum FeaturedPolicy {
    /// Top `limit` records by review count
    TopReviewed { limit: usize },
    /// Records carrying `featured: true`, in catalog order
    Flagged,
}

impl Default for FeaturedPolicy {
    fn default() -> Self {
        FeaturedPolicy::TopReviewed {
            limit: DEFAULT_FEATURED_LIMIT,
        }
    }
}

/// Authored dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetFile {
    pub name: String,
    #[serde(default)]
    pub featured: FeaturedPolicy,
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub decorations: Vec<Decoration>,
}
