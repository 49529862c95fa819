//! Error handling for the catalog
//!
//! - [`ErrorCode`]: stable numeric codes
//! - [`Violation`]: one broken data invariant
//! - [`CatalogError`]: load/validation failure
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 6xxx: Product record errors
//! - 9xxx: Loading errors
//!
//! # Example
//!
//! ```
//! use catalog::error::{CatalogError, ErrorCode, Violation};
//!
//! let err = CatalogError::Invalid(vec![Violation::new(0, Some(7), ErrorCode::ProductNoImages)]);
//! assert_eq!(err.violations()[0].code, ErrorCode::ProductNoImages);
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{CatalogError, CatalogResult, Violation};
