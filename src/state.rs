//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::DestinationService;
use crate::domain::repositories::DestinationRepository;

/// State shared by every request.
///
/// Holds no mutable data; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub destination_service: Arc<DestinationService>,
}

impl AppState {
    /// Builds the state around a repository implementation.
    pub fn new(repository: Arc<dyn DestinationRepository>) -> Self {
        Self {
            destination_service: Arc::new(DestinationService::new(repository)),
        }
    }
}
