//! One-pass validation for property listing input.
//!
//! Every rule is evaluated and every violation collected before returning,
//! so the caller gets the complete list of bad fields in a single
//! `CoreError::Validation` instead of failing on the first one.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CoreError, FieldViolation};

/// Supported listing locations, plus the `"All India"` wildcard.
pub const SUPPORTED_LOCATIONS: &[&str] =
    &["All India", "Mumbai", "Delhi", "Bangalore", "Kerala"];

/// Supported property categories.
pub const SUPPORTED_PROPERTY_TYPES: &[&str] =
    &["Apartment", "House", "Villa", "Plot", "Commercial"];

/// Supported listing types.
pub const LISTING_TYPES: &[&str] = &["buy", "rent"];

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

/// The fields of a listing that are subject to validation, borrowed from
/// whatever request shape the HTTP layer parsed.
#[derive(Debug)]
pub struct ListingInput<'a> {
    pub title: &'a str,
    pub price: f64,
    pub details: &'a str,
    pub location: &'a str,
    pub size: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub description: &'a str,
    pub images: &'a [String],
    pub contact_name: &'a str,
    pub contact_email: &'a str,
    pub contact_phone: &'a str,
    pub listing_type: &'a str,
    pub property_type: &'a str,
}

/// Validate a complete listing, collecting all violations.
pub fn validate_listing(input: &ListingInput<'_>) -> Result<(), CoreError> {
    let mut violations = Vec::new();

    require_non_empty(&mut violations, "title", input.title);
    require_non_empty(&mut violations, "details", input.details);
    require_non_empty(&mut violations, "description", input.description);
    require_non_empty(&mut violations, "contact_name", input.contact_name);

    if input.price <= 0.0 {
        push(&mut violations, "price", "must be greater than zero");
    }
    if input.size <= 0.0 {
        push(&mut violations, "size", "must be greater than zero");
    }
    if input.bedrooms < 0 {
        push(&mut violations, "bedrooms", "must not be negative");
    }
    if input.bathrooms < 0 {
        push(&mut violations, "bathrooms", "must not be negative");
    }
    if input.images.is_empty() {
        push(&mut violations, "images", "at least one image is required");
    }
    if !EMAIL_RE.is_match(input.contact_email) {
        push(&mut violations, "contact_email", "must be a valid email address");
    }
    if !PHONE_RE.is_match(input.contact_phone) {
        push(&mut violations, "contact_phone", "must be a 10-digit phone number");
    }
    if !LISTING_TYPES.contains(&input.listing_type) {
        push(&mut violations, "listing_type", "must be one of: buy, rent");
    }
    if !SUPPORTED_PROPERTY_TYPES.contains(&input.property_type) {
        push(
            &mut violations,
            "property_type",
            "must be one of: Apartment, House, Villa, Plot, Commercial",
        );
    }
    if !SUPPORTED_LOCATIONS.contains(&input.location) {
        push(&mut violations, "location", "is not a supported location");
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(violations))
    }
}

fn require_non_empty(violations: &mut Vec<FieldViolation>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        push(violations, field, "is required");
    }
}

fn push(violations: &mut Vec<FieldViolation>, field: &'static str, message: &str) {
    violations.push(FieldViolation {
        field,
        message: message.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn valid_input() -> ListingInput<'static> {
        static IMAGES: LazyLock<Vec<String>> =
            LazyLock::new(|| vec!["/images/flat-front.jpg".to_string()]);
        ListingInput {
            title: "2BHK in Andheri",
            price: 85.0,
            details: "Semi-furnished, 4th floor",
            location: "Mumbai",
            size: 950.0,
            bedrooms: 2,
            bathrooms: 2,
            description: "Close to the metro, society parking.",
            images: &IMAGES,
            contact_name: "Asha Rao",
            contact_email: "asha@example.com",
            contact_phone: "9876543210",
            listing_type: "buy",
            property_type: "Apartment",
        }
    }

    #[test]
    fn accepts_a_complete_listing() {
        assert!(validate_listing(&valid_input()).is_ok());
    }

    #[test]
    fn collects_every_violation_in_one_pass() {
        let mut input = valid_input();
        input.title = "  ";
        input.price = 0.0;
        input.contact_phone = "12345";
        input.listing_type = "lease";

        let err = validate_listing(&input).unwrap_err();
        let CoreError::Validation(violations) = err else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, ["title", "price", "contact_phone", "listing_type"]);
    }

    #[test]
    fn rejects_bad_contact_details() {
        let mut input = valid_input();
        input.contact_email = "not-an-email";
        input.contact_phone = "98765432101"; // 11 digits

        let err = validate_listing(&input).unwrap_err();
        let CoreError::Validation(violations) = err else {
            panic!("expected validation error");
        };
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn rejects_unknown_location_and_type() {
        let mut input = valid_input();
        input.location = "Atlantis";
        input.property_type = "Castle";
        assert_matches!(validate_listing(&input), Err(CoreError::Validation(_)));
    }

    #[test]
    fn requires_at_least_one_image() {
        let mut input = valid_input();
        input.images = &[];
        let err = validate_listing(&input).unwrap_err();
        let CoreError::Validation(violations) = err else {
            panic!("expected validation error");
        };
        assert_eq!(violations[0].field, "images");
    }
}
