//! Theme view models
//!
//! Each theme pairs a canonical record with its decoration and the layout
//! annotations derived from its position. The catalog is borrowed, never
//! modified.

use serde::Serialize;

use super::category::distinct_by;
use super::layout::{Coordinates, TileSpan, coordinate_for};
use crate::models::{ProductRecord, TileSize};
use crate::store::Catalog;

/// Blueprint view entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlueprintItem<'a> {
    pub product: &'a ProductRecord,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<&'a str>,
}

/// Editorial (masonry) view entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorialTile<'a> {
    pub product: &'a ProductRecord,
    pub size: TileSize,
    pub span: TileSpan,
}

/// Blueprint entries for every record, positioned by catalog index.
pub fn blueprint_items(catalog: &Catalog) -> Vec<BlueprintItem<'_>> {
    catalog
        .all()
        .iter()
        .enumerate()
        .map(|(index, product)| {
            let decoration = catalog.decoration(product.id);
            BlueprintItem {
                product,
                coordinates: coordinate_for(index),
                dimension: decoration.and_then(|d| d.dimension.as_deref()),
                material: decoration.and_then(|d| d.material.as_deref()),
            }
        })
        .collect()
}

/// Distinct materials in first-occurrence order.
pub fn materials_of<'a>(items: &[BlueprintItem<'a>]) -> Vec<&'a str> {
    distinct_by(items, |item| item.material)
}

/// Entries whose material equals `material` exactly.
pub fn filter_by_material<'s, 'a>(
    items: &'s [BlueprintItem<'a>],
    material: &str,
) -> Vec<&'s BlueprintItem<'a>> {
    items
        .iter()
        .filter(|item| item.material == Some(material))
        .collect()
}

/// Editorial tiles for every record. Undecorated records are medium.
pub fn editorial_tiles(catalog: &Catalog) -> Vec<EditorialTile<'_>> {
    catalog
        .all()
        .iter()
        .enumerate()
        .map(|(index, product)| {
            let size = catalog
                .decoration(product.id)
                .and_then(|d| d.size)
                .unwrap_or(TileSize::Medium);
            EditorialTile {
                product,
                size,
                span: TileSpan::for_tile(index, Some(size)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Dataset;

    #[test]
    fn test_blueprint_items() {
        let catalog = Catalog::builtin(Dataset::Blueprint).unwrap();
        let items = blueprint_items(&catalog);
        assert_eq!(items.len(), catalog.len());
        assert_eq!(items[0].material, Some("Oak"));
        assert_eq!(items[0].coordinates, coordinate_for(0));
        assert_eq!(items[3].dimension, Some("100×5×5"));
    }

    #[test]
    fn test_materials_and_filter() {
        let catalog = Catalog::builtin(Dataset::Blueprint).unwrap();
        let items = blueprint_items(&catalog);
        let materials = materials_of(&items);
        assert_eq!(materials.len(), 10);
        assert_eq!(materials[..3], ["Oak", "Steel", "Birch"]);

        let steel = filter_by_material(&items, "Steel");
        assert_eq!(steel.len(), 1);
        assert_eq!(steel[0].product.id, 2);
        assert!(filter_by_material(&items, "steel").is_empty());
    }

    #[test]
    fn test_undecorated_catalog() {
        let catalog = Catalog::builtin(Dataset::Furniture).unwrap();
        let items = blueprint_items(&catalog);
        assert!(items.iter().all(|i| i.material.is_none()));
        assert!(materials_of(&items).is_empty());

        let tiles = editorial_tiles(&catalog);
        assert!(tiles.iter().all(|t| t.size == TileSize::Medium));
        assert_eq!(tiles[0].span, TileSpan::WIDE);
        assert_eq!(tiles[1].span, TileSpan::TALL);
    }

    #[test]
    fn test_editorial_tiles() {
        let catalog = Catalog::builtin(Dataset::Editorial).unwrap();
        let tiles = editorial_tiles(&catalog);
        // Architectural Vase is large, Abstract Bookend small
        assert_eq!(tiles[0].span, TileSpan::LARGE);
        assert_eq!(tiles[3].size, TileSize::Small);
        assert_eq!(tiles[3].span, TileSpan::SMALL);
        // Minimalist Clock is medium at an odd index
        assert_eq!(tiles[1].span, TileSpan::TALL);
    }

    #[test]
    fn test_blueprint_serialize() {
        let catalog = Catalog::builtin(Dataset::Blueprint).unwrap();
        let items = blueprint_items(&catalog);
        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["material"], "Oak");
        assert_eq!(json["product"]["id"], 1);
        assert_eq!(json["coordinates"]["x"], 0.5);
    }
}
