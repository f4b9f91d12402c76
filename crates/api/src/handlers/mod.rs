//! Request handlers, grouped by resource.

pub mod admin;
pub mod premium;
pub mod property;
pub mod user;
pub mod wishlist;
