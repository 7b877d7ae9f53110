#![allow(dead_code)]

use destinations_api::domain::repositories::DestinationRepository;
use destinations_api::infrastructure::persistence::PgDestinationRepository;
use destinations_api::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub async fn create_test_destination(
    pool: &PgPool,
    name: &str,
    description: Option<&str>,
    lat: Option<f64>,
    lng: Option<f64>,
    image_url: Option<&str>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO destinations (name, description, lat, lng, image_url)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(name)
    .bind(description)
    .bind(lat)
    .bind(lng)
    .bind(image_url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_paris(pool: &PgPool) -> i64 {
    create_test_destination(
        pool,
        "Paris",
        Some("City of light"),
        Some(48.8566),
        Some(2.3522),
        Some("paris.jpg"),
    )
    .await
}

pub async fn create_bare_destination(pool: &PgPool, name: &str) -> i64 {
    create_test_destination(pool, name, None, None, None, None).await
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let repository: Arc<dyn DestinationRepository> =
        Arc::new(PgDestinationRepository::new(Arc::new(pool)));
    AppState::new(repository)
}
