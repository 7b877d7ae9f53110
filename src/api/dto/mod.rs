//! Data Transfer Objects for API responses.
//!
//! All DTOs use Serde for JSON serialization and are built from domain
//! entities via `From`.

pub mod destination;
pub mod health;
