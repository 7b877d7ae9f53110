//! Handlers for destination endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::json;

use crate::api::dto::destination::{DestinationDetail, DestinationItem};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all destinations.
///
/// # Endpoint
///
/// `GET /destinations`
///
/// # Response
///
/// A JSON array with one `{id, name, description, image_url}` object per
/// record. An empty table yields `[]`.
pub async fn destination_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<DestinationItem>>, AppError> {
    let destinations = state.destination_service.list_destinations().await?;

    tracing::debug!(count = destinations.len(), "Listed destinations");

    Ok(Json(
        destinations.into_iter().map(DestinationItem::from).collect(),
    ))
}

/// Returns a single destination with every field.
///
/// # Endpoint
///
/// `GET /destinations/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no destination has this id, including when the
/// id is not an integer or does not decode as UTF-8.
pub async fn destination_handler(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<DestinationDetail>, AppError> {
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable destination id");
        AppError::not_found("Destination not found", json!({}))
    })?;

    let destination = state.destination_service.get_destination(&id).await?;

    Ok(Json(DestinationDetail::from(destination)))
}
