use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to other modules.
#[derive(Error, Debug, Clone)]
pub enum ResetProgramError {
    #[error("No reset plan for user {user_id}")]
    NoPlan { user_id: Uuid },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error")]
    Internal,
}

impl ResetProgramError {
    pub fn no_plan(user_id: Uuid) -> Self {
        Self::NoPlan { user_id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
