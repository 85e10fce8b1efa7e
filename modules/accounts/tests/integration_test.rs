use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;
use uuid::Uuid;

use http_api::auth::AuthTokens;
use reset_program::contract::client::ResetProgramApi;
use reset_program::contract::model::ResetGoal;

use accounts::api::rest::dto::{LoginDto, SignupDto, UserDto};
use accounts::contract::model::{Credentials, NewUser, OnboardingProfile, ProfilePatch};
use accounts::domain::error::DomainError;
use accounts::domain::service::{Service, ServiceConfig};
use accounts::infra::storage::sea_orm_repo::SeaOrmUsersRepository;

struct NullGoalSource;

#[async_trait::async_trait]
impl reset_program::domain::ports::GoalSource for NullGoalSource {
    async fn reset_goal(&self, _user_id: Uuid) -> anyhow::Result<ResetGoal> {
        Ok(ResetGoal::BudgetDiscipline)
    }
}

/// Create a fresh test database with both schemas for each test
async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    accounts::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run accounts migrations");
    reset_program::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run reset_program migrations");

    db
}

struct TestEnv {
    service: Arc<Service>,
    reset: Arc<dyn ResetProgramApi>,
    tokens: Arc<AuthTokens>,
}

async fn create_test_env() -> TestEnv {
    let db = create_test_db().await;

    let reset_repo = Arc::new(
        reset_program::infra::storage::sea_orm_repo::SeaOrmPlansRepository::new(db.clone()),
    );
    let reset_service = Arc::new(reset_program::domain::service::Service::new(
        reset_repo,
        Arc::new(NullGoalSource),
    ));
    let reset: Arc<dyn ResetProgramApi> = Arc::new(
        reset_program::gateways::local::ResetProgramLocalClient::new(reset_service),
    );

    let tokens = Arc::new(AuthTokens::new("test-secret", 1));
    let repo = Arc::new(SeaOrmUsersRepository::new(db));
    // Low bcrypt cost keeps the test suite fast; production cost comes from config.
    let config = ServiceConfig {
        bcrypt_cost: 4,
        ..Default::default()
    };
    let service = Arc::new(Service::new(repo, reset.clone(), tokens.clone(), config));

    TestEnv {
        service,
        reset,
        tokens,
    }
}

fn demo_signup() -> NewUser {
    NewUser {
        name: "Grace Demo".to_string(),
        email: "grace@example.com".to_string(),
        password: "demo-password".to_string(),
    }
}

#[tokio::test]
async fn test_signup_and_login_roundtrip() -> Result<()> {
    let env = create_test_env().await;

    let user = env.service.signup(demo_signup()).await?;
    assert_eq!(user.email, "grace@example.com");
    assert_eq!(user.country, "US");
    assert_eq!(user.currency, "USD");
    assert!(!user.onboarding_complete);

    let (logged_in, token) = env
        .service
        .login(Credentials {
            email: "grace@example.com".to_string(),
            password: "demo-password".to_string(),
        })
        .await?;
    assert_eq!(logged_in.id, user.id);
    assert_eq!(env.tokens.verify(&token)?, user.id);

    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_rejected_case_insensitively() -> Result<()> {
    let env = create_test_env().await;
    env.service.signup(demo_signup()).await?;

    let err = env
        .service
        .signup(NewUser {
            name: "Other".to_string(),
            email: "GRACE@Example.COM".to_string(),
            password: "other-password".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::EmailAlreadyExists { .. }));

    Ok(())
}

#[tokio::test]
async fn test_signup_validation_names_first_bad_field() -> Result<()> {
    let env = create_test_env().await;

    let err = env
        .service
        .signup(NewUser {
            name: "G".to_string(),
            email: "grace@example.com".to_string(),
            password: "demo-password".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "name"));

    let err = env
        .service
        .signup(NewUser {
            name: "Grace".to_string(),
            email: "not-an-email".to_string(),
            password: "demo-password".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "email"));

    let err = env
        .service
        .signup(NewUser {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            password: "short".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "password"));

    Ok(())
}

#[tokio::test]
async fn test_wrong_password_is_invalid_credentials() -> Result<()> {
    let env = create_test_env().await;
    env.service.signup(demo_signup()).await?;

    let err = env
        .service
        .login(Credentials {
            email: "grace@example.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidCredentials));

    Ok(())
}

#[tokio::test]
async fn test_onboarding_creates_exactly_one_plan() -> Result<()> {
    let env = create_test_env().await;
    let user = env.service.signup(demo_signup()).await?;

    assert!(env.reset.get_plan(user.id).await?.is_none());

    let onboarded = env
        .service
        .onboard(
            user.id,
            OnboardingProfile {
                country: "NG".to_string(),
                currency: "NGN".to_string(),
                timezone: "Africa/Lagos".to_string(),
                reset_goal: ResetGoal::GivingConsistency,
            },
        )
        .await?;
    assert!(onboarded.onboarding_complete);
    assert_eq!(onboarded.country, "NG");
    assert_eq!(onboarded.reset_goal, ResetGoal::GivingConsistency);

    let plan = env.reset.get_plan(user.id).await?.expect("plan created");
    assert_eq!(plan.streak, 0);

    // Running onboarding again keeps the same plan.
    env.service
        .onboard(
            user.id,
            OnboardingProfile {
                country: "NG".to_string(),
                currency: "NGN".to_string(),
                timezone: "Africa/Lagos".to_string(),
                reset_goal: ResetGoal::GivingConsistency,
            },
        )
        .await?;
    let again = env.reset.get_plan(user.id).await?.expect("plan still there");
    assert_eq!(again.id, plan.id);

    Ok(())
}

#[tokio::test]
async fn test_profile_patch_is_partial() -> Result<()> {
    let env = create_test_env().await;
    let user = env.service.signup(demo_signup()).await?;

    let updated = env
        .service
        .update_profile(
            user.id,
            ProfilePatch {
                currency: Some("GBP".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.currency, "GBP");
    assert_eq!(updated.name, "Grace Demo"); // Unchanged

    Ok(())
}

#[tokio::test]
async fn test_change_password_verifies_current() -> Result<()> {
    let env = create_test_env().await;
    let user = env.service.signup(demo_signup()).await?;

    let err = env
        .service
        .change_password(user.id, "wrong-password", "new-password-1")
        .await
        .unwrap_err();
    assert!(
        matches!(err, DomainError::Validation { ref field, .. } if field == "current_password")
    );

    env.service
        .change_password(user.id, "demo-password", "new-password-1")
        .await?;

    // Old password no longer works, the new one does.
    assert!(env
        .service
        .login(Credentials {
            email: "grace@example.com".to_string(),
            password: "demo-password".to_string(),
        })
        .await
        .is_err());
    assert!(env
        .service
        .login(Credentials {
            email: "grace@example.com".to_string(),
            password: "new-password-1".to_string(),
        })
        .await
        .is_ok());

    Ok(())
}

// ---- HTTP surface ----

async fn create_test_router() -> (axum::Router, Arc<AuthTokens>) {
    let env = create_test_env().await;
    let router = accounts::api::rest::routes::router(env.service.clone())
        .layer(axum::Extension(env.tokens.clone()));
    (router, env.tokens)
}

#[tokio::test]
async fn test_http_signup_then_login() -> Result<()> {
    let (router, _tokens) = create_test_router().await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/signup")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"name":"Grace Demo","email":"Grace@Example.com","password":"demo-password"}"#,
                ))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let created: SignupDto = serde_json::from_slice(&body)?;
    assert_eq!(created.email, "grace@example.com");

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"email":"grace@example.com","password":"demo-password"}"#,
                ))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let login: LoginDto = serde_json::from_slice(&body)?;
    assert_eq!(login.user.id, created.id);
    assert!(!login.token.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_http_profile_requires_auth() -> Result<()> {
    let (router, _tokens) = create_test_router().await;

    let response = router
        .oneshot(Request::builder().uri("/user").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn test_http_profile_with_token() -> Result<()> {
    let (router, _tokens) = create_test_router().await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/signup")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"name":"Grace Demo","email":"grace@example.com","password":"demo-password"}"#,
                ))?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    r#"{"email":"grace@example.com","password":"demo-password"}"#,
                ))?,
        )
        .await?;
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let login: LoginDto = serde_json::from_slice(&body)?;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/user")
                .header("Authorization", format!("Bearer {}", login.token))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let user: UserDto = serde_json::from_slice(&body)?;
    assert_eq!(user.email, "grace@example.com");

    Ok(())
}

#[tokio::test]
async fn test_http_catalogs_shape() -> Result<()> {
    let (router, tokens) = create_test_router().await;
    let token = tokens.issue(Uuid::new_v4())?;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/meta/catalogs")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let catalogs: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(catalogs["countries"].as_array().unwrap().len(), 18);
    assert_eq!(catalogs["currencies"].as_array().unwrap().len(), 15);
    assert_eq!(catalogs["reset_goals"].as_array().unwrap().len(), 4);

    Ok(())
}
