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

use finance::api::rest::dto::{BudgetDto, TransactionDto};
use finance::contract::model::{
    BudgetCategory, BudgetUpsert, GivingType, IncomeSource, NewGivingEntry, NewTransaction,
    TransactionKind,
};
use finance::domain::error::DomainError;
use finance::domain::service::Service;
use finance::infra::storage::migrations::Migrator;
use finance::infra::storage::sea_orm_repo::SeaOrmFinanceRepository;

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
    Arc::new(Service::new(Arc::new(SeaOrmFinanceRepository::new(db))))
}

fn march(day: u32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
}

fn new_tx(kind: TransactionKind, amount: f64, category: Option<&str>, day: u32) -> NewTransaction {
    NewTransaction {
        kind,
        amount,
        currency: "USD".to_string(),
        category_name: category.map(str::to_string),
        date: march(day),
        note: None,
    }
}

#[tokio::test]
async fn test_budget_upsert_replaces_document() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    let first = service
        .upsert_budget(
            user_id,
            BudgetUpsert {
                month: 3,
                year: 2026,
                incomes: vec![
                    IncomeSource {
                        label: "Salary".to_string(),
                        amount: 4500.0,
                        currency: "USD".to_string(),
                    },
                    IncomeSource {
                        label: "Freelance".to_string(),
                        amount: 500.0,
                        currency: "USD".to_string(),
                    },
                ],
                categories: vec![BudgetCategory {
                    name: "Housing / Rent".to_string(),
                    planned_amount: 1200.0,
                    color: None,
                }],
            },
        )
        .await?;
    assert_eq!(first.incomes.len(), 2);
    assert_eq!(first.categories.len(), 1);

    // Re-posting with only one income and no categories replaces the whole
    // document: the category list comes back empty, not merged.
    let second = service
        .upsert_budget(
            user_id,
            BudgetUpsert {
                month: 3,
                year: 2026,
                incomes: vec![IncomeSource {
                    label: "Salary".to_string(),
                    amount: 4800.0,
                    currency: "USD".to_string(),
                }],
                categories: vec![],
            },
        )
        .await?;
    assert_eq!(second.id, first.id);
    assert_eq!(second.incomes.len(), 1);
    assert_eq!(second.incomes[0].amount, 4800.0);
    assert!(second.categories.is_empty());

    // A different month is a different document.
    let other = service.get_budget(user_id, 4, 2026).await?;
    assert!(other.is_none());

    Ok(())
}

#[tokio::test]
async fn test_budget_validation() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    let err = service
        .upsert_budget(
            user_id,
            BudgetUpsert {
                month: 13,
                year: 2026,
                incomes: vec![],
                categories: vec![],
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "month"));

    let err = service
        .upsert_budget(
            user_id,
            BudgetUpsert {
                month: 1,
                year: 2019,
                incomes: vec![],
                categories: vec![],
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "year"));

    let err = service
        .upsert_budget(
            user_id,
            BudgetUpsert {
                month: 1,
                year: 2026,
                incomes: vec![IncomeSource {
                    label: "Salary".to_string(),
                    amount: 0.0,
                    currency: "USD".to_string(),
                }],
                categories: vec![],
            },
        )
        .await
        .unwrap_err();
    assert!(
        matches!(err, DomainError::Validation { ref field, .. } if field == "incomes.amount")
    );

    Ok(())
}

#[tokio::test]
async fn test_transactions_window_sort_and_limit() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    service
        .create_transaction(user_id, new_tx(TransactionKind::Expense, 10.0, None, 5))
        .await?;
    service
        .create_transaction(user_id, new_tx(TransactionKind::Expense, 20.0, None, 20))
        .await?;
    service
        .create_transaction(user_id, new_tx(TransactionKind::Expense, 30.0, None, 12))
        .await?;
    // Outside the March window.
    let mut april = new_tx(TransactionKind::Expense, 99.0, None, 1);
    april.date = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();
    service.create_transaction(user_id, april).await?;

    let txs = service
        .list_transactions(user_id, Some(3), Some(2026), None)
        .await?;
    let amounts: Vec<f64> = txs.iter().map(|t| t.amount).collect();
    // Newest first within the month.
    assert_eq!(amounts, vec![20.0, 30.0, 10.0]);

    let capped = service
        .list_transactions(user_id, Some(3), Some(2026), Some(2))
        .await?;
    assert_eq!(capped.len(), 2);

    // No window: everything, newest first.
    let all = service.list_transactions(user_id, None, None, None).await?;
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].amount, 99.0);

    Ok(())
}

#[tokio::test]
async fn test_transaction_validation() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    let err = service
        .create_transaction(user_id, new_tx(TransactionKind::Expense, 0.0, None, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "amount"));

    let mut bad_currency = new_tx(TransactionKind::Expense, 5.0, None, 1);
    bad_currency.currency = "US".to_string();
    let err = service
        .create_transaction(user_id, bad_currency)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "currency"));

    Ok(())
}

#[tokio::test]
async fn test_deletes_are_owner_scoped_no_ops() -> Result<()> {
    let service = create_test_service().await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let tx = service
        .create_transaction(alice, new_tx(TransactionKind::Expense, 10.0, None, 1))
        .await?;

    // Bob deleting Alice's transaction by a perfectly valid id: silent
    // success, nothing removed, nothing leaked.
    service.delete_transaction(bob, tx.id).await?;
    assert_eq!(
        service.list_transactions(alice, None, None, None).await?.len(),
        1
    );

    // Alice deletes it for real; a repeat delete stays a no-op success.
    service.delete_transaction(alice, tx.id).await?;
    service.delete_transaction(alice, tx.id).await?;
    assert!(service.list_transactions(alice, None, None, None).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_giving_crud_and_scoping() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    let entry = service
        .create_giving(
            user_id,
            NewGivingEntry {
                amount: 100.0,
                currency: "USD".to_string(),
                date: march(2),
                giving_type: GivingType::Tithe,
                note: Some("first fruits".to_string()),
            },
        )
        .await?;
    assert_eq!(entry.giving_type, GivingType::Tithe);

    let listed = service.list_giving(user_id, Some(3), Some(2026)).await?;
    assert_eq!(listed.len(), 1);

    let stranger = Uuid::new_v4();
    assert!(service.list_giving(stranger, Some(3), Some(2026)).await?.is_empty());

    service.delete_giving(user_id, entry.id).await?;
    assert!(service.list_giving(user_id, None, None).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_report_worked_example_and_purity() -> Result<()> {
    let service = create_test_service().await;
    let user_id = Uuid::new_v4();

    service
        .create_transaction(user_id, new_tx(TransactionKind::Expense, 50.0, Some("Food"), 3))
        .await?;
    service
        .create_transaction(user_id, new_tx(TransactionKind::Expense, 30.0, Some("Food"), 9))
        .await?;
    service
        .create_transaction(user_id, new_tx(TransactionKind::Income, 1000.0, None, 1))
        .await?;

    let report = service.monthly_report(user_id, 3, 2026).await?;
    assert_eq!(report.income, 1000.0);
    assert_eq!(report.expenses, 80.0);
    assert_eq!(report.net, 920.0);
    assert_eq!(report.top_categories.len(), 1);
    assert_eq!(report.top_categories[0].name, "Food");
    assert_eq!(report.top_categories[0].amount, 80.0);
    assert_eq!(report.transaction_count, 3);
    assert_eq!(report.giving_count, 0);

    // Identical inputs, identical output, and nothing was mutated.
    let again = service.monthly_report(user_id, 3, 2026).await?;
    assert_eq!(again, report);
    assert_eq!(
        service.list_transactions(user_id, None, None, None).await?.len(),
        3
    );

    Ok(())
}

#[tokio::test]
async fn test_report_includes_giving_and_scopes_by_owner() -> Result<()> {
    let service = create_test_service().await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    service
        .create_giving(
            alice,
            NewGivingEntry {
                amount: 40.0,
                currency: "USD".to_string(),
                date: march(7),
                giving_type: GivingType::Offering,
                note: None,
            },
        )
        .await?;
    service
        .create_transaction(bob, new_tx(TransactionKind::Expense, 500.0, Some("Rent"), 7))
        .await?;

    let report = service.monthly_report(alice, 3, 2026).await?;
    assert_eq!(report.giving, 40.0);
    assert_eq!(report.giving_count, 1);
    // Bob's expense never shows in Alice's report.
    assert_eq!(report.expenses, 0.0);
    assert_eq!(report.transaction_count, 0);

    Ok(())
}

// ---- HTTP surface ----

async fn create_test_router() -> (axum::Router, Arc<AuthTokens>) {
    let service = create_test_service().await;
    let tokens = Arc::new(AuthTokens::new("test-secret", 1));
    let router = finance::api::rest::routes::router(service)
        .layer(axum::Extension(tokens.clone()));
    (router, tokens)
}

#[tokio::test]
async fn test_http_budget_roundtrip() -> Result<()> {
    let (router, tokens) = create_test_router().await;
    let token = tokens.issue(Uuid::new_v4())?;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/budget")
                .header("Authorization", format!("Bearer {token}"))
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"month":3,"year":2026,"incomes":[{"label":"Salary","amount":4500,"currency":"USD"}]}"#,
                ))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let budget: BudgetDto = serde_json::from_slice(&body)?;
    assert_eq!(budget.incomes.len(), 1);
    assert!(budget.categories.is_empty());

    // Reading another month returns null, not 404.
    let response = router
        .oneshot(
            Request::builder()
                .uri("/budget?month=4&year=2026")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let missing: Option<BudgetDto> = serde_json::from_slice(&body)?;
    assert!(missing.is_none());

    Ok(())
}

#[tokio::test]
async fn test_http_transaction_create_and_delete() -> Result<()> {
    let (router, tokens) = create_test_router().await;
    let token = tokens.issue(Uuid::new_v4())?;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/transactions")
                .header("Authorization", format!("Bearer {token}"))
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"type":"expense","amount":12.5,"currency":"USD","category_name":"Food","date":"2026-03-05T12:00:00Z"}"#,
                ))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let tx: TransactionDto = serde_json::from_slice(&body)?;
    assert_eq!(tx.amount, 12.5);

    // Delete is 204 even for an unknown id (idempotent).
    let response = router
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/transactions/{}", Uuid::new_v4()))
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
async fn test_http_validation_names_first_bad_field() -> Result<()> {
    let (router, tokens) = create_test_router().await;
    let token = tokens.issue(Uuid::new_v4())?;

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/transactions")
                .header("Authorization", format!("Bearer {token}"))
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"type":"expense","amount":-5,"currency":"USD","date":"2026-03-05T12:00:00Z"}"#,
                ))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let problem: serde_json::Value = serde_json::from_slice(&body)?;
    assert!(problem["detail"].as_str().unwrap().starts_with("amount"));

    Ok(())
}

#[tokio::test]
async fn test_http_report_shape() -> Result<()> {
    let (router, tokens) = create_test_router().await;
    let token = tokens.issue(Uuid::new_v4())?;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/reports?month=3&year=2026")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let report: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(report["month"], 3);
    assert_eq!(report["income"], 0.0);
    assert_eq!(report["top_categories"].as_array().unwrap().len(), 0);

    Ok(())
}
