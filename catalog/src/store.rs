//! Catalog Store
//!
//! An immutable, validated product list. Construction is the only place
//! data can fail; every view over a [`Catalog`] is infallible.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{DatasetFile, Decoration, FeaturedPolicy, ProductRecord};
use crate::validation::{validate_decorations, validate_products};

const FURNITURE_JSON: &str = include_str!("../data/furniture.json");
const EDITORIAL_JSON: &str = include_str!("../data/editorial.json");
const BLUEPRINT_JSON: &str = include_str!("../data/blueprint.json");

/// Compiled-in datasets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    /// Full furniture catalog, featured by review count
    Furniture,
    /// Editorial/masonry collection, featured by flag, with tile sizes
    Editorial,
    /// Blueprint collection, featured by flag, with materials and dimensions
    Blueprint,
}

impl Dataset {
    pub const ALL: [Dataset; 3] = [Dataset::Furniture, Dataset::Editorial, Dataset::Blueprint];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Furniture => "furniture",
            Dataset::Editorial => "editorial",
            Dataset::Blueprint => "blueprint",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            Dataset::Furniture => FURNITURE_JSON,
            Dataset::Editorial => EDITORIAL_JSON,
            Dataset::Blueprint => BLUEPRINT_JSON,
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a dataset name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dataset: {0}")]
pub struct UnknownDataset(pub String);

impl FromStr for Dataset {
    type Err = UnknownDataset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDataset(s.to_string()))
    }
}

/// Validated, read-only product catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    featured: FeaturedPolicy,
    products: Vec<ProductRecord>,
    decorations: HashMap<u32, Decoration>,
}

impl Catalog {
    /// Build a catalog from bare records with the default featured policy.
    pub fn new(products: Vec<ProductRecord>) -> CatalogResult<Self> {
        Self::from_dataset(DatasetFile {
            name: "custom".to_string(),
            featured: FeaturedPolicy::default(),
            products,
            decorations: Vec::new(),
        })
    }

    /// Validate a dataset and freeze it.
    ///
    /// All violations across products and decorations are reported in a
    /// single [`CatalogError::Invalid`].
    pub fn from_dataset(file: DatasetFile) -> CatalogResult<Self> {
        let mut violations = validate_products(&file.products);
        violations.extend(validate_decorations(&file.decorations, &file.products));

        if !violations.is_empty() {
            for v in &violations {
                tracing::warn!(
                    dataset = %file.name,
                    code = %v.code,
                    index = v.index,
                    product_id = ?v.product_id,
                    "{}",
                    v.message
                );
            }
            return Err(CatalogError::Invalid(violations));
        }

        let mut decorations = HashMap::with_capacity(file.decorations.len());
        for d in file.decorations {
            decorations.insert(d.id, d);
        }

        tracing::info!(
            dataset = %file.name,
            products = file.products.len(),
            decorations = decorations.len(),
            "Catalog loaded"
        );

        Ok(Self {
            name: file.name,
            featured: file.featured,
            products: file.products,
            decorations,
        })
    }

    /// Parse and validate a dataset document.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let file: DatasetFile = serde_json::from_str(json)?;
        Self::from_dataset(file)
    }

    /// Read, parse and validate a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = json.len(), "Read dataset file");
        Self::from_json_str(&json)
    }

    /// Load one of the compiled-in datasets.
    pub fn builtin(dataset: Dataset) -> CatalogResult<Self> {
        Self::from_json_str(dataset.source())
    }

    /// Every record, in authoring order.
    pub fn all(&self) -> &[ProductRecord] {
        &self.products
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn featured_policy(&self) -> FeaturedPolicy {
        self.featured
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Lookup by id
    pub fn get(&self, id: u32) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Theme decoration for a product, if any
    pub fn decoration(&self, id: u32) -> Option<&Decoration> {
        self.decorations.get(&id)
    }
}
