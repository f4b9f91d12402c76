//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where partial
//!   updates exist

pub mod category;
pub mod premium_transaction;
pub mod property;
pub mod reported_listing;
pub mod user;
pub mod wishlist;
