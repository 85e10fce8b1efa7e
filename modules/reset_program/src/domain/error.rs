use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors for the reset program.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No reset plan for user {user_id}")]
    PlanNotFound { user_id: Uuid },

    #[error("Unknown task id: '{task_id}'")]
    UnknownTask { task_id: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn plan_not_found(user_id: Uuid) -> Self {
        Self::PlanNotFound { user_id }
    }

    pub fn unknown_task(task_id: impl Into<String>) -> Self {
        Self::UnknownTask {
            task_id: task_id.into(),
        }
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
