//! Field validation for catalog request payloads.
//!
//! Runs in the handlers after JSON decoding and before any service call, so
//! malformed input never reaches the database.

use crate::error::CoreError;

/// Maximum length (in characters) of a category or product name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length (in characters) of a product code.
pub const MAX_CODE_LEN: usize = 64;

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Strip leading and trailing whitespace from a free-text field in place.
///
/// Applied to names and codes before validation so `" Beer"` and `"Beer"`
/// are stored, and checked for uniqueness, as the same value.
pub fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_owned();
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a category or product name.
///
/// Names must contain at least one non-whitespace character and be at most
/// [`MAX_NAME_LEN`] characters long.
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    validate_text(field, value, MAX_NAME_LEN)
}

/// Validate a product code. Same rules as names, with [`MAX_CODE_LEN`].
pub fn validate_code(value: &str) -> Result<(), CoreError> {
    validate_text("code", value, MAX_CODE_LEN)
}

/// Validate that a price in cents is non-negative.
pub fn validate_price_cents(price_cents: i32) -> Result<(), CoreError> {
    if price_cents < 0 {
        return Err(CoreError::Validation(format!(
            "price_cents must be >= 0, got {price_cents}"
        )));
    }
    Ok(())
}

/// Validate an optional category reference.
///
/// `None` is fine; a present but blank id is rejected rather than stored as a
/// reference that can never match.
pub fn validate_category_ref(category_id: Option<&str>) -> Result<(), CoreError> {
    match category_id {
        Some(id) if id.trim().is_empty() => Err(CoreError::Validation(
            "category_id must not be blank when provided".to_string(),
        )),
        _ => Ok(()),
    }
}

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters, got {len}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    // -- trim_in_place --------------------------------------------------------

    #[test]
    fn trims_surrounding_whitespace() {
        let mut name = String::from("  Pale Ale\t");
        trim_in_place(&mut name);
        assert_eq!(name, "Pale Ale");
    }

    #[test]
    fn keeps_inner_whitespace_and_clean_values() {
        let mut name = String::from("Pale Ale");
        trim_in_place(&mut name);
        assert_eq!(name, "Pale Ale");
    }

    // -- validate_name --------------------------------------------------------

    #[test]
    fn accepts_regular_name() {
        assert!(validate_name("name", "Beer").is_ok());
    }

    #[test]
    fn accepts_name_at_max_length() {
        let name = "a".repeat(MAX_NAME_LEN);
        assert!(validate_name("name", &name).is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert_matches!(validate_name("name", ""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_whitespace_only_name() {
        assert_matches!(validate_name("name", "   "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_name_over_max_length() {
        let name = "a".repeat(MAX_NAME_LEN + 1);
        assert_matches!(validate_name("name", &name), Err(CoreError::Validation(msg)) if msg.contains("at most"));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let name = "ñ".repeat(MAX_NAME_LEN);
        assert!(validate_name("name", &name).is_ok());
    }

    // -- validate_code --------------------------------------------------------

    #[test]
    fn accepts_product_code() {
        assert!(validate_code("BR-001").is_ok());
    }

    #[test]
    fn rejects_empty_code() {
        assert_matches!(validate_code(""), Err(CoreError::Validation(msg)) if msg.starts_with("code"));
    }

    #[test]
    fn rejects_code_over_max_length() {
        let code = "X".repeat(MAX_CODE_LEN + 1);
        assert!(validate_code(&code).is_err());
    }

    // -- validate_price_cents -------------------------------------------------

    #[test]
    fn accepts_zero_price() {
        assert!(validate_price_cents(0).is_ok());
    }

    #[test]
    fn accepts_positive_price() {
        assert!(validate_price_cents(500).is_ok());
    }

    #[test]
    fn rejects_negative_price() {
        assert_matches!(validate_price_cents(-1), Err(CoreError::Validation(_)));
    }

    // -- validate_category_ref ------------------------------------------------

    #[test]
    fn accepts_missing_category() {
        assert!(validate_category_ref(None).is_ok());
    }

    #[test]
    fn accepts_present_category() {
        assert!(validate_category_ref(Some("9b2f3c4e-0000-4000-8000-000000000000")).is_ok());
    }

    #[test]
    fn rejects_blank_category() {
        assert!(validate_category_ref(Some(" ")).is_err());
    }
}
