use axum::http::StatusCode;
use http_api::problem::{self, Problem, ProblemResponse};

use crate::domain::error::DomainError;

/// Map domain errors to problem responses. The monthly cap gets its own
/// code so clients can render the specific message.
pub fn problem_from(error: &DomainError) -> ProblemResponse {
    match error {
        DomainError::GoalNotFound { .. } => problem::not_found("Prayer goal not found"),
        DomainError::GoalLimitReached { .. } => Problem::new(
            StatusCode::CONFLICT,
            "Conflict",
            "Maximum 3 prayer goals per month",
        )
        .with_code("prayer-goals/limit-reached")
        .into(),
        DomainError::Validation { field, message } => {
            problem::bad_request(format!("{field}: {message}"))
        }
        DomainError::Database { .. } => problem::internal_error(),
    }
}
