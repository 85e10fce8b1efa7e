use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;
use uuid::Uuid;

use http_api::auth::AuthTokens;

use prayer::contract::model::{GoalPatch, NewPrayerEntry, NewPrayerGoal};
use prayer::domain::error::DomainError;
use prayer::domain::service::Service;
use prayer::infra::storage::migrations::Migrator;
use prayer::infra::storage::sea_orm_repo::SeaOrmPrayerRepository;

/// Create a fresh test database for each test
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    Migrator::up(&db, None).await.expect("Failed to run migrations");

    db
}

async fn create_test_service() -> Arc<Service> {
    let db = create_test_db().await;
    Arc::new(Service::new(Arc::new(SeaOrmPrayerRepository::new(db))))
}

fn goal(title: &str) -> NewPrayerGoal {
    NewPrayerGoal {
        month: 3,
        year: 2026,
        title: title.to_string(),
        notes: None,
        linked_to_finance: false,
    }
}

#[tokio::test]
async fn test_third_goal_succeeds_fourth_hits_the_cap() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    service.create_goal(user_id, goal("Tithe faithfully")).await?;
    service.create_goal(user_id, goal("Save for emergencies")).await?;
    service.create_goal(user_id, goal("Give to missions")).await?;

    let err = service
        .create_goal(user_id, goal("One goal too many"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::GoalLimitReached { month: 3, year: 2026 }));

    // The cap is per (owner, month, year): another month is fine...
    let mut april = goal("April goal");
    april.month = 4;
    service.create_goal(user_id, april).await?;

    // ...and so is another owner in the same month.
    service.create_goal(Uuid::new_v4(), goal("Other owner")).await?;

    Ok(())
}

#[tokio::test]
async fn test_goal_validation() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    let mut bad_month = goal("Valid title");
    bad_month.month = 0;
    let err = service.create_goal(user_id, bad_month).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "month"));

    let err = service.create_goal(user_id, goal("  ")).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "title"));

    Ok(())
}

#[tokio::test]
async fn test_goal_update_is_owner_scoped() -> Result<()> {
    let service = create_test_service().await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let created = service.create_goal(alice, goal("Pray daily")).await?;

    // Bob supplies a perfectly valid id belonging to Alice: not found, not
    // "forbidden-but-visible".
    let err = service
        .update_goal(bob, created.id, GoalPatch {
            completed: Some(true),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::GoalNotFound { .. }));

    let updated = service
        .update_goal(alice, created.id, GoalPatch {
            completed: Some(true),
            ..Default::default()
        })
        .await?;
    assert!(updated.completed);
    assert_eq!(updated.title, "Pray daily"); // Unchanged

    Ok(())
}

#[tokio::test]
async fn test_goal_delete_is_idempotent() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    let created = service.create_goal(user_id, goal("Pray daily")).await?;
    service.delete_goal(user_id, created.id).await?;
    // Repeat delete and foreign-id delete are silent successes.
    service.delete_goal(user_id, created.id).await?;
    service.delete_goal(user_id, Uuid::new_v4()).await?;

    assert!(service.list_goals(user_id, None, None).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_goal_list_filters_by_month() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    service.create_goal(user_id, goal("March goal")).await?;
    let mut april = goal("April goal");
    april.month = 4;
    service.create_goal(user_id, april).await?;

    let march_goals = service.list_goals(user_id, Some(3), Some(2026)).await?;
    assert_eq!(march_goals.len(), 1);
    assert_eq!(march_goals[0].title, "March goal");

    let all = service.list_goals(user_id, None, None).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_journal_is_append_only_newest_first_capped() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    // 31 entries on consecutive days; the list caps at 30, newest first.
    for day in 1..=31u32 {
        service
            .create_entry(
                user_id,
                NewPrayerEntry {
                    date: Utc.with_ymd_and_hms(2026, 3, day, 8, 0, 0).unwrap(),
                    content: format!("day {day}"),
                },
            )
            .await?;
    }

    let entries = service.list_entries(user_id).await?;
    assert_eq!(entries.len(), 30);
    assert_eq!(entries[0].content, "day 31");
    assert_eq!(entries[29].content, "day 2");

    Ok(())
}

#[tokio::test]
async fn test_entry_requires_content() -> Result<()> {
    let service = create_test_service().await;

    let err = service
        .create_entry(
            Uuid::new_v4(),
            NewPrayerEntry {
                date: Utc::now(),
                content: "   ".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "content"));

    Ok(())
}

// ---- HTTP surface ----

async fn create_test_router() -> (axum::Router, Arc<AuthTokens>) {
    let service = create_test_service().await;
    let tokens = Arc::new(AuthTokens::new("test-secret", 1));
    let router =
        prayer::api::rest::routes::router(service).layer(axum::Extension(tokens.clone()));
    (router, tokens)
}

#[tokio::test]
async fn test_http_goal_cap_is_a_distinct_conflict() -> Result<()> {
    let (router, tokens) = create_test_router().await;
    let token = tokens.issue(Uuid::new_v4())?;

    for i in 0..3 {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/prayer/goals")
                    .header("Authorization", format!("Bearer {token}"))
                    .header("Content-Type", "application/json")
                    .body(Body::from(format!(
                        r#"{{"month":3,"year":2026,"title":"Goal {i}"}}"#
                    )))?,
            )
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/prayer/goals")
                .header("Authorization", format!("Bearer {token}"))
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"month":3,"year":2026,"title":"Fourth goal"}"#,
                ))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let problem: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(problem["code"], "prayer-goals/limit-reached");
    assert_eq!(problem["detail"], "Maximum 3 prayer goals per month");

    Ok(())
}

#[tokio::test]
async fn test_http_entries_require_auth() -> Result<()> {
    let (router, _tokens) = create_test_router().await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/prayer/entries")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
