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
    CreateEntryReq, CreateGoalReq, EntryDto, GoalDto, GoalListQuery, GoalPatchReq,
};
use crate::api::rest::error::problem_from;
use crate::domain::service::Service;

// ---- goals ----

pub async fn create_goal(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<CreateGoalReq>,
) -> Result<(StatusCode, Json<GoalDto>), ProblemResponse> {
    match svc.create_goal(user_id, req.into()).await {
        Ok(goal) => Ok((StatusCode::CREATED, Json(GoalDto::from(goal)))),
        Err(e) => {
            error!("Failed to create prayer goal: {}", e);
            Err(problem_from(&e))
        }
    }
}

pub async fn list_goals(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<GoalListQuery>,
) -> Result<Json<Vec<GoalDto>>, ProblemResponse> {
    match svc.list_goals(user_id, query.month, query.year).await {
        Ok(goals) => Ok(Json(goals.into_iter().map(GoalDto::from).collect())),
        Err(e) => {
            error!("Failed to list prayer goals: {}", e);
            Err(problem_from(&e))
        }
    }
}

pub async fn update_goal(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<GoalPatchReq>,
) -> Result<Json<GoalDto>, ProblemResponse> {
    match svc.update_goal(user_id, id, req.into()).await {
        Ok(goal) => Ok(Json(GoalDto::from(goal))),
        Err(e) => {
            error!("Failed to update prayer goal {}: {}", id, e);
            Err(problem_from(&e))
        }
    }
}

pub async fn delete_goal(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ProblemResponse> {
    match svc.delete_goal(user_id, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete prayer goal {}: {}", id, e);
            Err(problem_from(&e))
        }
    }
}

// ---- journal entries ----

pub async fn create_entry(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<CreateEntryReq>,
) -> Result<(StatusCode, Json<EntryDto>), ProblemResponse> {
    match svc.create_entry(user_id, req.into()).await {
        Ok(entry) => Ok((StatusCode::CREATED, Json(EntryDto::from(entry)))),
        Err(e) => {
            error!("Failed to create prayer entry: {}", e);
            Err(problem_from(&e))
        }
    }
}

pub async fn list_entries(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<EntryDto>>, ProblemResponse> {
    match svc.list_entries(user_id).await {
        Ok(entries) => Ok(Json(entries.into_iter().map(EntryDto::from).collect())),
        Err(e) => {
            error!("Failed to list prayer entries: {}", e);
            Err(problem_from(&e))
        }
    }
}

pub async fn delete_entry(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ProblemResponse> {
    match svc.delete_entry(user_id, id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            error!("Failed to delete prayer entry {}: {}", id, e);
            Err(problem_from(&e))
        }
    }
}
