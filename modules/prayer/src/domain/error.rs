use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors for prayer tracking.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Prayer goal not found: {id}")]
    GoalNotFound { id: Uuid },

    /// The 3-goals-per-month cap. Distinct from plain validation so the
    /// caller can render the specific message.
    #[error("Maximum 3 prayer goals per month")]
    GoalLimitReached { month: u32, year: i32 },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn goal_not_found(id: Uuid) -> Self {
        Self::GoalNotFound { id }
    }

    pub fn goal_limit_reached(month: u32, year: i32) -> Self {
        Self::GoalLimitReached { month, year }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
