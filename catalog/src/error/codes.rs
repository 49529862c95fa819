//! Catalog error codes
//!
//! Codes are grouped by range:
//! - 0xxx: General errors
//! - 6xxx: Product record errors
//! - 9xxx: Loading errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable error code enum
///
/// Represented as u16 values so violation reports serialize the same way
/// for every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 6xxx: Product ====================
    /// Product id must be positive
    ProductInvalidId = 6004,
    /// Product id appears more than once
    ProductDuplicateId = 6005,
    /// Product has no images
    ProductNoImages = 6006,
    /// Main image is not one of the product images
    ProductMainImageMissing = 6007,
    /// Rating outside [0, 5]
    ProductInvalidRating = 6008,
    /// Category label is empty
    ProductCategoryInvalid = 6204,
    /// Decoration references an unknown product
    DecorationUnknownProduct = 6401,

    // ==================== 9xxx: Loading ====================
    /// Dataset could not be parsed
    DatasetParseError = 9006,
    /// Dataset file could not be read
    DatasetIoError = 9007,
}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::ValueOutOfRange => "Value out of range",
            ErrorCode::ProductInvalidId => "Product id must be positive",
            ErrorCode::ProductDuplicateId => "Duplicate product id",
            ErrorCode::ProductNoImages => "Product has no images",
            ErrorCode::ProductMainImageMissing => "Main image is not listed in images",
            ErrorCode::ProductInvalidRating => "Rating must be between 0 and 5",
            ErrorCode::ProductCategoryInvalid => "Product category is invalid",
            ErrorCode::DecorationUnknownProduct => "Decoration references an unknown product",
            ErrorCode::DatasetParseError => "Dataset could not be parsed",
            ErrorCode::DatasetIoError => "Dataset file could not be read",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),
            6004 => Ok(ErrorCode::ProductInvalidId),
            6005 => Ok(ErrorCode::ProductDuplicateId),
            6006 => Ok(ErrorCode::ProductNoImages),
            6007 => Ok(ErrorCode::ProductMainImageMissing),
            6008 => Ok(ErrorCode::ProductInvalidRating),
            6204 => Ok(ErrorCode::ProductCategoryInvalid),
            6401 => Ok(ErrorCode::DecorationUnknownProduct),
            9006 => Ok(ErrorCode::DatasetParseError),
            9007 => Ok(ErrorCode::DatasetIoError),
            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
