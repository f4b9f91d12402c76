//! Listing quota and wishlist capacity rules.

/// Maximum number of property listings for a non-premium account.
pub const FREE_PROPERTY_LIMIT: i32 = 2;

/// Maximum number of live wishlist entries per user.
pub const WISHLIST_CAPACITY: i64 = 3;

/// Fixed price of the premium upgrade, in currency units.
pub const PREMIUM_AMOUNT: i32 = 299;

/// Whether a user may create another listing.
///
/// Premium bypasses the free-tier limit entirely; `property_count` keeps
/// accruing for premium users, only the check is skipped. The actual
/// enforcement is the atomic conditional increment in the user repository,
/// which evaluates this same condition inside a single UPDATE.
pub fn can_create(is_premium: bool, property_count: i32) -> bool {
    is_premium || property_count < FREE_PROPERTY_LIMIT
}
