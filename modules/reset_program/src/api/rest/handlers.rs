use axum::{response::Json, Extension};
use http_api::auth::CurrentUser;
use http_api::problem::ProblemResponse;
use tracing::error;

use crate::api::rest::dto::{
    AddReflectionReq, CompleteTaskReq, PlanPatchReq, ResetPlanDto, TaskDto, TodayDto,
};
use crate::api::rest::error::problem_from;
use crate::domain::program;
use crate::domain::service::Service;

/// The owner's plan, or null before onboarding.
pub async fn get_plan(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Option<ResetPlanDto>>, ProblemResponse> {
    match svc.get_plan(user_id).await {
        Ok(plan) => Ok(Json(plan.map(ResetPlanDto::from))),
        Err(e) => {
            error!("Failed to load plan: {}", e);
            Err(problem_from(&e))
        }
    }
}

/// Today's task, day number, streak, and scripture.
pub async fn today(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<TodayDto>, ProblemResponse> {
    match svc.today(user_id).await {
        Ok(view) => Ok(Json(TodayDto::from(view))),
        Err(e) => {
            error!("Failed to build today view: {}", e);
            Err(problem_from(&e))
        }
    }
}

/// Mark a task completed; repeated calls are safe no-ops.
pub async fn complete_task(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<CompleteTaskReq>,
) -> Result<Json<ResetPlanDto>, ProblemResponse> {
    match svc.complete_task(user_id, &req.task_id).await {
        Ok(plan) => Ok(Json(ResetPlanDto::from(plan))),
        Err(e) => {
            error!("Failed to complete task {}: {}", req.task_id, e);
            Err(problem_from(&e))
        }
    }
}

/// Append a weekly reflection.
pub async fn add_reflection(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<AddReflectionReq>,
) -> Result<Json<ResetPlanDto>, ProblemResponse> {
    match svc.add_reflection(user_id, req.into()).await {
        Ok(plan) => Ok(Json(ResetPlanDto::from(plan))),
        Err(e) => {
            error!("Failed to append reflection: {}", e);
            Err(problem_from(&e))
        }
    }
}

/// Administrative field patch.
pub async fn patch_plan(
    Extension(svc): Extension<std::sync::Arc<Service>>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<PlanPatchReq>,
) -> Result<Json<ResetPlanDto>, ProblemResponse> {
    match svc.patch_plan(user_id, req.into()).await {
        Ok(plan) => Ok(Json(ResetPlanDto::from(plan))),
        Err(e) => {
            error!("Failed to patch plan: {}", e);
            Err(problem_from(&e))
        }
    }
}

/// The full program table.
pub async fn program_table(CurrentUser(_user_id): CurrentUser) -> Json<Vec<TaskDto>> {
    Json(program::tasks().iter().map(TaskDto::from).collect())
}
