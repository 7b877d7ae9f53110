//! Domain layer containing entities and repository contracts.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; lookups by identifier are resolved in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
