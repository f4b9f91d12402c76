//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Guard conditions with a
//! race window in a check-then-write rendering (quota increment, wishlist
//! capacity, mark-sold, transaction finalization) are single conditional
//! statements here.

pub mod category_repo;
pub mod premium_transaction_repo;
pub mod property_repo;
pub mod reported_listing_repo;
pub mod user_repo;
pub mod wishlist_repo;

pub use category_repo::CategoryRepo;
pub use premium_transaction_repo::PremiumTransactionRepo;
pub use property_repo::PropertyRepo;
pub use reported_listing_repo::ReportedListingRepo;
pub use user_repo::UserRepo;
pub use wishlist_repo::WishlistRepo;
