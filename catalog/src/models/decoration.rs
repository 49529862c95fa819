//! Theme Decoration Model
//!
//! Per-theme annotations keyed by product id. Kept apart from
//! [`ProductRecord`](super::ProductRecord) so themes never alter canonical data.

use serde::{Deserialize, Serialize};

/// Editorial tile size hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileSize {
    Large,
    Medium,
    Small,
}

impl TileSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileSize::Large => "large",
            TileSize::Medium => "medium",
            TileSize::Small => "small",
        }
    }
}

impl std::fmt::Display for TileSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Decoration entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    /// Product reference
    pub id: u32,
    /// Physical dimensions, e.g. "40×40×12" (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<TileSize>,
}

impl Decoration {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            dimension: None,
            material: None,
            size: None,
        }
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.dimension = Some(dimension.into());
        self
    }

    pub fn with_size(mut self, size: TileSize) -> Self {
        self.size = Some(size);
        self
    }
}
