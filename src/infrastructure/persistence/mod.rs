//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! - [`PgDestinationRepository`] - Destination listing and lookup

pub mod pg_destination_repository;

pub use pg_destination_repository::PgDestinationRepository;
