//! Catalog data validation
//!
//! Every check runs to completion so a single pass reports all problems.
//! Limits:
//! - Names: short enough for a product card title
//! - Descriptions: a paragraph
//! - Image references: URL-sized

use std::collections::HashSet;

use crate::error::{ErrorCode, Violation};
use crate::models::{Decoration, ProductRecord};

// ── Text length limits ──────────────────────────────────────────────

/// Product names and category labels
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Image references (paths or URLs)
pub const MAX_URL_LEN: usize = 2048;

/// Highest allowed rating
pub const MAX_RATING: f32 = 5.0;

// ── Field helpers ───────────────────────────────────────────────────

/// Check that a required string is non-empty and within the length limit.
pub fn check_required_text(value: &str, field: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    check_text_len(value, field, max_len)
}

/// Check that a string is within the length limit.
pub fn check_text_len(value: &str, field: &str, max_len: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len > max_len {
        return Err(format!("{field} is too long ({len} chars, max {max_len})"));
    }
    Ok(())
}

// ── Record checks ───────────────────────────────────────────────────

/// Validate one product record, appending to `out`.
fn validate_product(index: usize, p: &ProductRecord, out: &mut Vec<Violation>) {
    let id = (p.id > 0).then_some(p.id);

    if p.id == 0 {
        out.push(Violation::new(index, None, ErrorCode::ProductInvalidId));
    }

    if let Err(msg) = check_required_text(&p.name, "name", MAX_NAME_LEN) {
        let code = if p.name.trim().is_empty() {
            ErrorCode::RequiredField
        } else {
            ErrorCode::ValueOutOfRange
        };
        out.push(Violation::with_message(index, id, code, msg));
    }

    if let Err(msg) = check_required_text(&p.category, "category", MAX_NAME_LEN) {
        out.push(Violation::with_message(
            index,
            id,
            ErrorCode::ProductCategoryInvalid,
            msg,
        ));
    }

    if let Some(desc) = &p.description
        && let Err(msg) = check_text_len(desc, "description", MAX_NOTE_LEN)
    {
        out.push(Violation::with_message(index, id, ErrorCode::ValueOutOfRange, msg));
    }

    if p.images.is_empty() {
        out.push(Violation::new(index, id, ErrorCode::ProductNoImages));
    } else if !p.images.iter().any(|img| img == &p.main_image) {
        out.push(Violation::with_message(
            index,
            id,
            ErrorCode::ProductMainImageMissing,
            format!("mainImage {:?} is not listed in images", p.main_image),
        ));
    }

    for (i, img) in p.images.iter().enumerate() {
        if let Err(msg) = check_required_text(img, &format!("images[{i}]"), MAX_URL_LEN) {
            out.push(Violation::with_message(index, id, ErrorCode::ValueOutOfRange, msg));
        }
    }

    if let Some(rating) = p.rating
        && !(rating.is_finite() && (0.0..=MAX_RATING).contains(&rating))
    {
        out.push(Violation::with_message(
            index,
            id,
            ErrorCode::ProductInvalidRating,
            format!("rating {rating} is outside 0..={MAX_RATING}"),
        ));
    }
}

/// Validate a product list: per-record checks plus id uniqueness.
pub fn validate_products(products: &[ProductRecord]) -> Vec<Violation> {
    let mut out = Vec::new();
    let mut seen = HashSet::with_capacity(products.len());

    for (index, p) in products.iter().enumerate() {
        validate_product(index, p, &mut out);

        if p.id > 0 && !seen.insert(p.id) {
            out.push(Violation::with_message(
                index,
                Some(p.id),
                ErrorCode::ProductDuplicateId,
                format!("id {} is already used by an earlier record", p.id),
            ));
        }
    }

    out
}

/// Validate decorations against the product list they annotate.
pub fn validate_decorations(
    decorations: &[Decoration],
    products: &[ProductRecord],
) -> Vec<Violation> {
    let known: HashSet<u32> = products.iter().map(|p| p.id).collect();
    let mut seen = HashSet::with_capacity(decorations.len());
    let mut out = Vec::new();

    for (index, d) in decorations.iter().enumerate() {
        if !known.contains(&d.id) {
            out.push(Violation::with_message(
                index,
                Some(d.id),
                ErrorCode::DecorationUnknownProduct,
                format!("decoration references unknown product {}", d.id),
            ));
        }
        if !seen.insert(d.id) {
            out.push(Violation::with_message(
                index,
                Some(d.id),
                ErrorCode::ValidationFailed,
                format!("product {} is decorated more than once", d.id),
            ));
        }
        for (field, value) in [("material", &d.material), ("dimension", &d.dimension)] {
            if let Some(v) = value
                && let Err(msg) = check_required_text(v, field, MAX_NAME_LEN)
            {
                out.push(Violation::with_message(
                    index,
                    Some(d.id),
                    ErrorCode::ValueOutOfRange,
                    msg,
                ));
            }
        }
    }

    out
}
