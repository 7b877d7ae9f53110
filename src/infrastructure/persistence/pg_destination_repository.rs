//! PostgreSQL implementation of destination repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Destination, DestinationSummary};
use crate::domain::repositories::DestinationRepository;
use crate::error::AppError;

/// PostgreSQL repository for destination lookups.
///
/// Queries are bound at runtime with `sqlx::query_as`, so building the crate
/// does not need a live database.
pub struct PgDestinationRepository {
    pool: Arc<PgPool>,
}

impl PgDestinationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DestinationRow {
    id: i64,
    name: String,
    description: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
    image_url: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<DestinationRow> for Destination {
    fn from(r: DestinationRow) -> Self {
        Destination::new(
            r.id,
            r.name,
            r.description,
            r.lat,
            r.lng,
            r.image_url,
            r.created_at,
            r.updated_at,
        )
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: i64,
    name: String,
    description: Option<String>,
    image_url: Option<String>,
}

impl From<SummaryRow> for DestinationSummary {
    fn from(r: SummaryRow) -> Self {
        DestinationSummary {
            id: r.id,
            name: r.name,
            description: r.description,
            image_url: r.image_url,
        }
    }
}

#[async_trait]
impl DestinationRepository for PgDestinationRepository {
    async fn list_all(&self) -> Result<Vec<DestinationSummary>, AppError> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT id, name, description, image_url
            FROM destinations
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(DestinationSummary::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Destination>, AppError> {
        let row = sqlx::query_as::<_, DestinationRow>(
            r#"
            SELECT id, name, description, lat, lng, image_url, created_at, updated_at
            FROM destinations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Destination::from))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM destinations")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
