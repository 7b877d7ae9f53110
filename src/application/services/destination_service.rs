//! Destination lookup service.

use crate::domain::entities::{Destination, DestinationSummary};
use crate::domain::repositories::DestinationRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service answering destination queries for HTTP handlers and the admin CLI.
///
/// Resolves the raw identifier taken from a request path into a storage key
/// and turns a missing record into [`AppError::NotFound`].
pub struct DestinationService<R: DestinationRepository + ?Sized = dyn DestinationRepository> {
    repository: Arc<R>,
}

impl<R: DestinationRepository + ?Sized> DestinationService<R> {
    /// Creates a new destination service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every destination as a summary.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_destinations(&self) -> Result<Vec<DestinationSummary>, AppError> {
        self.repository.list_all().await
    }

    /// Retrieves a full destination by the identifier token from a request.
    ///
    /// A token that is not a valid integer key is reported the same way as
    /// an unknown id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the token does not parse or no record matches.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_destination(&self, raw_id: &str) -> Result<Destination, AppError> {
        let not_found = || AppError::not_found("Destination not found", json!({"id": raw_id}));

        let id: i64 = raw_id.trim().parse().map_err(|_| not_found())?;

        self.repository.find_by_id(id).await?.ok_or_else(not_found)
    }

    /// Counts stored destinations.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_destinations(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
