use http_api::problem::{self, ProblemResponse};

use crate::domain::error::DomainError;

/// Map domain errors to problem responses.
pub fn problem_from(error: &DomainError) -> ProblemResponse {
    match error {
        DomainError::Validation { field, message } => {
            problem::bad_request(format!("{field}: {message}"))
        }
        DomainError::Database { .. } => problem::internal_error(),
    }
}
