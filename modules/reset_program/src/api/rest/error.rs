use http_api::problem::{self, ProblemResponse};

use crate::domain::error::DomainError;

/// Map domain errors to problem responses.
pub fn problem_from(error: &DomainError) -> ProblemResponse {
    match error {
        DomainError::PlanNotFound { .. } => problem::not_found("No plan found"),
        DomainError::UnknownTask { task_id } => {
            problem::bad_request(format!("task_id: unknown task '{task_id}'"))
        }
        DomainError::Validation { field, message } => {
            problem::bad_request(format!("{field}: {message}"))
        }
        DomainError::Database { .. } => problem::internal_error(),
    }
}
