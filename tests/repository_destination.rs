mod common;

use destinations_api::domain::repositories::DestinationRepository;
use destinations_api::infrastructure::persistence::PgDestinationRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_list_all_empty(pool: PgPool) {
    let repo = PgDestinationRepository::new(Arc::new(pool));

    let result = repo.list_all().await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

#[sqlx::test]
async fn test_list_all_one_entry_per_record(pool: PgPool) {
    let paris = common::create_paris(&pool).await;
    let rome = common::create_bare_destination(&pool, "Rome").await;
    let repo = PgDestinationRepository::new(Arc::new(pool));

    let list = repo.list_all().await.unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, paris);
    assert_eq!(list[0].name, "Paris");
    assert_eq!(list[0].image_url.as_deref(), Some("paris.jpg"));
    assert_eq!(list[1].id, rome);
    assert!(list[1].description.is_none());
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::create_paris(&pool).await;
    let repo = PgDestinationRepository::new(Arc::new(pool));

    let result = repo.find_by_id(id).await;

    assert!(result.is_ok());
    let destination = result.unwrap().expect("destination should exist");
    assert_eq!(destination.id, id);
    assert_eq!(destination.name, "Paris");
    assert_eq!(destination.lat, Some(48.8566));
    assert_eq!(destination.lng, Some(2.3522));
    assert!(destination.created_at.is_some());
    assert!(destination.updated_at.is_some());
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgDestinationRepository::new(Arc::new(pool));

    let result = repo.find_by_id(999999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_count(pool: PgPool) {
    for i in 1..=3 {
        common::create_bare_destination(&pool, &format!("Place {}", i)).await;
    }
    let repo = PgDestinationRepository::new(Arc::new(pool));

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
async fn test_updated_at_is_maintained(pool: PgPool) {
    let id = common::create_bare_destination(&pool, "Lisbon").await;

    sqlx::query("UPDATE destinations SET description = 'Seven hills' WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgDestinationRepository::new(Arc::new(pool));
    let destination = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(destination.description.as_deref(), Some("Seven hills"));
    assert!(destination.updated_at > destination.created_at);
}
