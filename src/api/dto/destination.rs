//! DTOs for destination endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Destination, DestinationSummary};

/// Destination as it appears in `GET /destinations`.
///
/// Absent optional values serialize as `null`.
#[derive(Debug, Serialize)]
pub struct DestinationItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl From<DestinationSummary> for DestinationItem {
    fn from(s: DestinationSummary) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            image_url: s.image_url,
        }
    }
}

/// Full destination record returned by `GET /destinations/{id}`.
#[derive(Debug, Serialize)]
pub struct DestinationDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Destination> for DestinationDetail {
    fn from(d: Destination) -> Self {
        Self {
            id: d.id,
            name: d.name,
            description: d.description,
            lat: d.lat,
            lng: d.lng,
            image_url: d.image_url,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}
