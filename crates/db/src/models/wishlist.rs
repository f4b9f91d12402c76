//! Wishlist entry model and DTOs.

use basera_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `wishlist_entries` table.
///
/// `(user_email, property_id)` is unique; at most
/// [`basera_core::quota::WISHLIST_CAPACITY`] live entries exist per user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WishlistEntry {
    pub id: DbId,
    pub user_email: String,
    pub property_id: DbId,
    pub added_at: Timestamp,
}

/// DTO for adding a property to a wishlist.
#[derive(Debug, Clone, Deserialize)]
pub struct AddWishlistEntry {
    pub user_email: String,
    pub property_id: DbId,
}
