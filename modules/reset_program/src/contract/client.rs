use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::ResetPlan;

/// Public API trait for the reset_program module that other modules can use.
#[async_trait]
pub trait ResetProgramApi: Send + Sync {
    /// Create the user's plan if it does not exist yet and return it.
    ///
    /// Called by onboarding, which is the only place a plan may come into
    /// existence; an already-present plan is returned untouched.
    async fn ensure_plan(&self, user_id: Uuid) -> anyhow::Result<ResetPlan>;

    /// Load the user's plan, if any.
    async fn get_plan(&self, user_id: Uuid) -> anyhow::Result<Option<ResetPlan>>;
}
