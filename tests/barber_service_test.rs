//! Barber service tests over an in-memory store.

mod common;

use common::Harness;
use silla_booking::domain::UpsertBarber;
use silla_booking::errors::AppError;

#[tokio::test]
async fn test_barber_upsert_derives_slug_and_overwrites() {
    let h = Harness::new();

    let created = h
        .barbers
        .upsert(UpsertBarber {
            name: "Gian Marco".to_string(),
            role_key: "team.roles.barber".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, "gian-marco");

    h.barbers
        .upsert(UpsertBarber {
            id: Some("gian-marco".to_string()),
            name: "Gian Marco".to_string(),
            img: "/assets/gm.png".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let listed = h.barbers.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].img, "/assets/gm.png");
    // Full-record update: fields left out are cleared
    assert_eq!(listed[0].role_key, "");
}

#[tokio::test]
async fn test_barber_upsert_needs_id_or_name() {
    let h = Harness::new();
    let result = h.barbers.upsert(UpsertBarber::default()).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_barber_delete_missing_is_silent() {
    let h = Harness::new();
    h.barbers.delete("nobody").await.unwrap();
}
