use axum::http::StatusCode;
use http_api::problem::{self, Problem, ProblemResponse};

use crate::domain::error::DomainError;

/// Map domain errors to problem responses.
pub fn problem_from(error: &DomainError) -> ProblemResponse {
    match error {
        DomainError::UserNotFound { .. } => problem::not_found("User not found"),
        DomainError::EmailAlreadyExists { .. } => {
            Problem::new(StatusCode::CONFLICT, "Conflict", "Email already in use")
                .with_code("accounts/email-taken")
                .into()
        }
        DomainError::InvalidCredentials => {
            Problem::new(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Invalid email or password",
            )
            .into()
        }
        DomainError::Validation { field, message } => {
            problem::bad_request(format!("{field}: {message}"))
        }
        DomainError::Database { .. } => problem::internal_error(),
    }
}
