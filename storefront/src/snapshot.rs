//! Catalog snapshot
//!
//! Every derived view of a catalog gathered into one serializable value.
//! Featured records are emitted in full; the other views refer to records
//! by id.

use serde::Serialize;

use catalog::views::{
    CategoryIndex, Coordinates, TileSpan, blueprint_items, editorial_tiles, materials_of,
};
use catalog::{Catalog, CategorySelection, ProductRecord, TileSize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary<'a> {
    pub label: &'a str,
    pub count: usize,
    pub ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlueprintPoint<'a> {
    pub id: u32,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TilePlacement {
    pub id: u32,
    pub size: TileSize,
    pub span: TileSpan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub dataset: &'a str,
    pub product_count: usize,
    pub featured: Vec<&'a ProductRecord>,
    pub categories: Vec<CategorySummary<'a>>,
    pub selection: String,
    pub visible: Vec<u32>,
    pub materials: Vec<&'a str>,
    pub blueprint: Vec<BlueprintPoint<'a>>,
    pub editorial: Vec<TilePlacement>,
}

impl<'a> Snapshot<'a> {
    /// Compute every view of `catalog`
    ///
    /// `featured_limit` replaces the ranked limit of the catalog's policy.
    pub fn build(
        catalog: &'a Catalog,
        featured_limit: Option<usize>,
        selection: &CategorySelection,
    ) -> Self {
        let all = catalog.all();

        let policy = match featured_limit {
            Some(limit) => catalog.featured_policy().with_limit(limit),
            None => catalog.featured_policy(),
        };
        let featured = policy.apply(all);

        let index = CategoryIndex::build(all);
        let categories = index
            .iter()
            .map(|(label, partition)| CategorySummary {
                label,
                count: partition.len(),
                ids: partition.iter().map(|p| p.id).collect(),
            })
            .collect();

        let visible = selection.apply(all).iter().map(|p| p.id).collect();

        let items = blueprint_items(catalog);
        let materials = materials_of(&items);
        let blueprint = items
            .iter()
            .map(|item| BlueprintPoint {
                id: item.product.id,
                coordinates: item.coordinates,
                material: item.material,
                dimension: item.dimension,
            })
            .collect();

        let editorial = editorial_tiles(catalog)
            .into_iter()
            .map(|tile| TilePlacement {
                id: tile.product.id,
                size: tile.size,
                span: tile.span,
            })
            .collect();

        tracing::debug!(
            dataset = catalog.name(),
            featured = featured.len(),
            categories = index.len(),
            selection = %selection,
            "Built catalog snapshot"
        );

        Self {
            dataset: catalog.name(),
            product_count: catalog.len(),
            featured,
            categories,
            selection: selection.to_string(),
            visible,
            materials,
            blueprint,
            editorial,
        }
    }
}
