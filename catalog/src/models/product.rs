//! Product Model

use serde::{Deserialize, Serialize};

/// Product record as authored in a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Positive, unique within a catalog
    pub id: u32,
    pub name: String,
    /// Free-form category label (open set)
    pub category: String,
    /// Image references, in display order
    pub images: Vec<String>,
    /// Must be one of `images`
    pub main_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display price, e.g. "$1,299" (never parsed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// 0.0 - 5.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    /// Review count, the popularity metric
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    /// Explicit promotion flag
    #[serde(default)]
    pub featured: bool,
}

impl ProductRecord {
    /// Minimal record with a single image; optional fields unset
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        main_image: impl Into<String>,
    ) -> Self {
        let main_image = main_image.into();
        Self {
            id,
            name: name.into(),
            category: category.into(),
            images: vec![main_image.clone()],
            main_image,
            description: None,
            price: None,
            rating: None,
            reviews: None,
            featured: false,
        }
    }

    pub fn with_reviews(mut self, reviews: u32) -> Self {
        self.reviews = Some(reviews);
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Review count with missing treated as 0
    #[inline]
    pub fn popularity(&self) -> u32 {
        self.reviews.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": 8,
            "name": "Storage Bed with Drawers",
            "category": "bedrooms",
            "images": ["/products/bedrooms/bedroom15.jpg"],
            "mainImage": "/products/bedrooms/bedroom15.jpg",
            "price": "$1,199",
            "rating": 4.8,
            "reviews": 203
        }"#;
        let p: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, 8);
        assert_eq!(p.main_image, "/products/bedrooms/bedroom15.jpg");
        assert_eq!(p.price.as_deref(), Some("$1,199"));
        assert_eq!(p.reviews, Some(203));
        assert!(p.description.is_none());
        assert!(!p.featured);
    }

    #[test]
    fn test_serialize_skips_missing_optionals() {
        let p = ProductRecord::new(1, "Desk Lamp", "lighting", "/lamp.jpg");
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"mainImage\":\"/lamp.jpg\""));
        assert!(!json.contains("price"));
        assert!(!json.contains("reviews"));
    }

    #[test]
    fn test_popularity_defaults_to_zero() {
        let p = ProductRecord::new(1, "Desk Lamp", "lighting", "/lamp.jpg");
        assert_eq!(p.popularity(), 0);
        assert_eq!(p.with_reviews(79).popularity(), 79);
    }
}
