//! Property entity model and DTOs.

use basera_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Property {
    pub id: DbId,
    pub title: String,
    /// Price in lakhs.
    pub price: f64,
    /// Display form derived from `price` (`₹85.0L`, `₹1.20Cr`).
    pub price_string: String,
    pub details: String,
    pub location: String,
    pub size: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub description: String,
    pub images: Vec<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub listing_type: String,
    pub property_type: String,
    pub owner_email: String,
    pub status: String,
    pub sold_out: bool,
    pub sold_out_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new property. `price_string` is derived, never
/// accepted from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProperty {
    pub user_email: String,
    pub title: String,
    pub price: f64,
    pub details: String,
    pub location: String,
    pub size: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub description: String,
    pub images: Vec<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub listing_type: String,
    pub property_type: String,
}

/// DTO for the owner-only partial update. `user_email` identifies the
/// caller; all other fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProperty {
    pub user_email: String,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub details: Option<String>,
    pub location: Option<String>,
    pub size: Option<f64>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub listing_type: Option<String>,
    pub property_type: Option<String>,
}

/// Sort order for property listings.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PropertySort {
    /// Creation time, newest first.
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
}

/// Conjunctive filter for the public listing query. All fields optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyFilter {
    /// Exact match; `"All India"` means no location constraint.
    pub location: Option<String>,
    pub property_type: Option<String>,
    /// Matched case-insensitively (`buy` / `rent`).
    pub listing_type: Option<String>,
    /// Inclusive lower bound, in lakhs.
    pub min_price: Option<f64>,
    /// Inclusive upper bound, in lakhs.
    pub max_price: Option<f64>,
    /// When unset or false, only `active` listings are returned.
    pub include_sold_out: Option<bool>,
    pub sort: Option<PropertySort>,
}
