use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
    Extension,
};
use http_api::auth::CurrentUser;
use http_api::problem::ProblemResponse;
use tracing::error;
use uuid::Uuid;

use crate::api::rest::dto::{
    self, BudgetDto, BudgetUpsertReq, CreateGivingReq, CreateTransactionReq, DefaultCategoryDto,
    GivingDto, ListQuery, MonthQuery, ReportDto, TransactionDto,
};
use crate::api::rest::error::problem_from;
use crate::domain::service::Service;

// ---- budget ----

/// The owner's budget for a month, or null if none was stored yet.
pub async fn get_budget(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Option<BudgetDto>>, ProblemResponse> {
    match svc.get_budget(user_id, query.month, query.year).await {
        Ok(budget) => Ok(Json(budget.map(BudgetDto::from))),
        Err(e) => {
            error!("Failed to load budget: {}", e);
            Err(problem_from(&e))
        }
    }
}

/// Store the month's budget, replacing any prior document whole.
pub async fn upsert_budget(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<BudgetUpsertReq>,
) -> Result<Json<BudgetDto>, ProblemResponse> {
    match svc.upsert_budget(user_id, req.into()).await {
        Ok(budget) => Ok(Json(BudgetDto::from(budget))),
        Err(e) => {
            error!("Failed to upsert budget: {}", e);
            Err(problem_from(&e))
        }
    }
}

/// The static default-category catalog.
pub async fn default_categories(CurrentUser(_user_id): CurrentUser) -> Json<Vec<DefaultCategoryDto>> {
    Json(dto::default_categories())
}

// ---- transactions ----

pub async fn create_transaction(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<CreateTransactionReq>,
) -> Result<(StatusCode, Json<TransactionDto>), ProblemResponse> {
    match svc.create_transaction(user_id, req.into()).await {
        Ok(tx) => Ok((StatusCode::CREATED, Json(TransactionDto::from(tx)))),
        Err(e) => {
            error!("Failed to create transaction: {}", e);
            Err(problem_from(&e))
        }
    }
}

pub async fn list_transactions(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TransactionDto>>, ProblemResponse> {
    match svc
        .list_transactions(user_id, query.month, query.year, query.limit)
        .await
    {
        Ok(txs) => Ok(Json(txs.into_iter().map(TransactionDto::from).collect())),
        Err(e) => {
            error!("Failed to list transactions: {}", e);
            Err(problem_from(&e))
        }
    }
}

/// Owner-scoped delete; an id that isn't the caller's deletes nothing.
pub async fn delete_transaction(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ProblemResponse> {
    match svc.delete_transaction(user_id, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete transaction {}: {}", id, e);
            Err(problem_from(&e))
        }
    }
}

// ---- giving ----

pub async fn create_giving(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<CreateGivingReq>,
) -> Result<(StatusCode, Json<GivingDto>), ProblemResponse> {
    match svc.create_giving(user_id, req.into()).await {
        Ok(entry) => Ok((StatusCode::CREATED, Json(GivingDto::from(entry)))),
        Err(e) => {
            error!("Failed to create giving entry: {}", e);
            Err(problem_from(&e))
        }
    }
}

pub async fn list_giving(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<GivingDto>>, ProblemResponse> {
    match svc.list_giving(user_id, query.month, query.year).await {
        Ok(entries) => Ok(Json(entries.into_iter().map(GivingDto::from).collect())),
        Err(e) => {
            error!("Failed to list giving entries: {}", e);
            Err(problem_from(&e))
        }
    }
}

pub async fn delete_giving(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ProblemResponse> {
    match svc.delete_giving(user_id, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete giving entry {}: {}", id, e);
            Err(problem_from(&e))
        }
    }
}

// ---- reports ----

/// Monthly aggregation; a pure read with no persisted side effect.
pub async fn monthly_report(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<MonthQuery>,
) -> Result<Json<ReportDto>, ProblemResponse> {
    match svc.monthly_report(user_id, query.month, query.year).await {
        Ok(report) => Ok(Json(ReportDto::from(report))),
        Err(e) => {
            error!("Failed to build report: {}", e);
            Err(problem_from(&e))
        }
    }
}
