//! Browsing session state
//!
//! Page-local state owned by a single caller: category and material
//! selections, cart and carousel position. Nothing here is shared or
//! persisted.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::models::ProductRecord;
use crate::store::Catalog;
use crate::views::{BlueprintItem, filter_by_category, filter_by_material};

/// Sentinel meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";
/// Sentinel meaning "no material filter"
pub const ALL_MATERIALS: &str = "all";

/// Category filter chosen by the shopper
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(String),
}

impl CategorySelection {
    /// Records visible under this selection, in catalog order
    pub fn apply<'a>(&self, all: &'a [ProductRecord]) -> Vec<&'a ProductRecord> {
        match self {
            CategorySelection::All => all.iter().collect(),
            CategorySelection::Only(category) => filter_by_category(all, category),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(category) => category,
        }
    }
}

impl FromStr for CategorySelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(s.to_string())
        })
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Material filter on the blueprint view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MaterialSelection {
    #[default]
    All,
    Only(String),
}

impl MaterialSelection {
    /// Blueprint entries visible under this selection, in catalog order
    pub fn apply<'s, 'a>(&self, items: &'s [BlueprintItem<'a>]) -> Vec<&'s BlueprintItem<'a>> {
        match self {
            MaterialSelection::All => items.iter().collect(),
            MaterialSelection::Only(material) => filter_by_material(items, material),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MaterialSelection::All => ALL_MATERIALS,
            MaterialSelection::Only(material) => material,
        }
    }
}

impl FromStr for MaterialSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == ALL_MATERIALS {
            MaterialSelection::All
        } else {
            MaterialSelection::Only(s.to_string())
        })
    }
}

impl fmt::Display for MaterialSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Append-only cart; each add is one line, duplicates included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: &ProductRecord) {
        self.lines.push(product.id);
        tracing::debug!(product_id = product.id, lines = self.lines.len(), "Added to cart");
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Product ids in the order they were added
    pub fn ids(&self) -> &[u32] {
        &self.lines
    }

    /// Resolve lines against a catalog, skipping ids it does not contain
    pub fn items<'a>(&self, catalog: &'a Catalog) -> Vec<&'a ProductRecord> {
        self.lines.iter().filter_map(|id| catalog.get(*id)).collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Cyclic slide index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one slide, wrapping to the first
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Go back one slide, wrapping to the last
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump straight to slide `index`; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Dataset;
    use crate::views::blueprint_items;

    #[test]
    fn test_selection_parse() {
        assert_eq!("all".parse::<CategorySelection>(), Ok(CategorySelection::All));
        assert_eq!(
            "sofas".parse::<CategorySelection>(),
            Ok(CategorySelection::Only("sofas".to_string()))
        );
        // sentinel match is exact
        assert_eq!(
            "All".parse::<CategorySelection>(),
            Ok(CategorySelection::Only("All".to_string()))
        );
        assert_eq!(CategorySelection::All.to_string(), "all");
    }

    #[test]
    fn test_selection_apply() {
        let catalog = Catalog::builtin(Dataset::Furniture).unwrap();
        assert_eq!(CategorySelection::All.apply(catalog.all()).len(), catalog.len());

        let pallets = CategorySelection::Only("pallets".into()).apply(catalog.all());
        assert_eq!(pallets.len(), 1);
        assert_eq!(pallets[0].id, 31);
    }

    #[test]
    fn test_material_selection() {
        let catalog = Catalog::builtin(Dataset::Blueprint).unwrap();
        let items = blueprint_items(&catalog);

        let all = MaterialSelection::All.apply(&items);
        assert_eq!(all.len(), items.len());

        let steel: Vec<u32> = MaterialSelection::Only("Steel".into())
            .apply(&items)
            .iter()
            .map(|item| item.product.id)
            .collect();
        assert_eq!(steel, vec![2]);

        assert_eq!("all".parse::<MaterialSelection>(), Ok(MaterialSelection::All));
        assert!(MaterialSelection::Only("steel".into()).apply(&items).is_empty());
        assert_eq!(MaterialSelection::Only("Oak".into()).to_string(), "Oak");
    }

    #[test]
    fn test_cart() {
        let catalog = Catalog::builtin(Dataset::Furniture).unwrap();
        let mut cart = Cart::new();
        assert!(cart.is_empty());

        let bed = catalog.get(3).unwrap();
        cart.add(bed);
        cart.add(bed);
        cart.add(catalog.get(55).unwrap());

        assert_eq!(cart.len(), 3);
        assert_eq!(cart.ids(), &[3, 3, 55]);
        let names: Vec<&str> = cart.items(&catalog).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Luxury Platform Bed", "Luxury Platform Bed", "Beech Pine Dining Set"]
        );

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_items_skip_foreign_ids() {
        let furniture = Catalog::builtin(Dataset::Furniture).unwrap();
        let editorial = Catalog::builtin(Dataset::Editorial).unwrap();
        let mut cart = Cart::new();
        cart.add(furniture.get(55).unwrap());
        assert!(cart.items(&editorial).is_empty());
    }

    #[test]
    fn test_carousel_wraps() {
        let mut c = Carousel::new(3);
        assert_eq!(c.index(), 0);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn test_carousel_select() {
        let mut c = Carousel::new(4);
        assert_eq!(c.select(2), 2);
        assert_eq!(c.next(), 3);
        // out of range keeps the current slide
        assert_eq!(c.select(4), 3);
        assert_eq!(c.select(usize::MAX), 3);
        assert_eq!(c.select(0), 0);
        assert_eq!(c.prev(), 3);
    }

    #[test]
    fn test_empty_carousel() {
        let mut c = Carousel::new(0);
        assert!(c.is_empty());
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert_eq!(c.select(0), 0);
        assert_eq!(c.select(3), 0);
    }
}
