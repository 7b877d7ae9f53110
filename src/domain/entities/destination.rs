//! Destination entity representing a point of interest.

use chrono::{DateTime, Utc};

/// A stored destination record with every column of the `destinations` table.
///
/// Coordinates and the image reference are free-form: no range check is
/// applied to `lat`/`lng` and `image_url` is not parsed as a URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Destination {
    /// Creates a new Destination instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: String,
        description: Option<String>,
        lat: Option<f64>,
        lng: Option<f64>,
        image_url: Option<String>,
        created_at: Option<DateTime<Utc>>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            lat,
            lng,
            image_url,
            created_at,
            updated_at,
        }
    }

    /// Returns true if both coordinates are present.
    pub fn has_coordinates(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }

    /// Projects the record down to its list representation.
    pub fn summary(&self) -> DestinationSummary {
        DestinationSummary {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// List projection of a destination.
///
/// Carries only `id`, `name`, `description` and `image_url`; coordinates and
/// timestamps are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}
