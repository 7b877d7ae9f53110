//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data access; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod destination_repository;

pub use destination_repository::DestinationRepository;

#[cfg(test)]
pub use destination_repository::MockDestinationRepository;
