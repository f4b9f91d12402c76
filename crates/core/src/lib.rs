//! Domain logic for the Basera property marketplace.
//!
//! Pure, storage-agnostic pieces: the price codec, listing validation,
//! quota rules, the payment gateway capability, and the shared error
//! taxonomy. Everything that touches Postgres lives in `basera-db`;
//! everything that touches HTTP lives in `basera-api`.

pub mod error;
pub mod payment;
pub mod price;
pub mod quota;
pub mod types;
pub mod validation;
