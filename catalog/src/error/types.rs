//! Error types for catalog construction and loading

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One broken invariant found while validating catalog data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Offending product id (None when the record has no usable id)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u32>,
    /// Position of the record in the source list
    pub index: usize,
    pub code: ErrorCode,
    pub message: String,
}

impl Violation {
    /// Create a violation with the default message for the code
    pub fn new(index: usize, product_id: Option<u32>, code: ErrorCode) -> Self {
        Self {
            product_id,
            index,
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a violation with a custom message
    pub fn with_message(
        index: usize,
        product_id: Option<u32>,
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            index,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.product_id {
            Some(id) => write!(
                f,
                "[{}] record #{} (id {}): {}",
                self.code, self.index, id, self.message
            ),
            None => write!(f, "[{}] record #{}: {}", self.code, self.index, self.message),
        }
    }
}

/// Catalog error
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Data failed validation; carries every violation found
    #[error("catalog validation failed with {} violation(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<Violation>),

    /// Dataset JSON could not be parsed
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Dataset file could not be read
    #[error("failed to read dataset {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Stable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::Invalid(_) => ErrorCode::ValidationFailed,
            CatalogError::Parse(_) => ErrorCode::DatasetParseError,
            CatalogError::Io { .. } => ErrorCode::DatasetIoError,
        }
    }

    /// Violations carried by a validation failure (empty otherwise)
    pub fn violations(&self) -> &[Violation] {
        match self {
            CatalogError::Invalid(v) => v,
            _ => &[],
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
