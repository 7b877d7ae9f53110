//! Repository trait for destination data access.

use crate::domain::entities::{Destination, DestinationSummary};
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only repository interface for destinations.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDestinationRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_destination.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Lists every destination projected to its summary fields.
    ///
    /// An empty table yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_all(&self) -> Result<Vec<DestinationSummary>, AppError>;

    /// Finds a destination by its primary key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Destination))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Destination>, AppError>;

    /// Counts stored destinations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
