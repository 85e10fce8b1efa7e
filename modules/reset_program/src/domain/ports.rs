use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::ResetGoal;

/// Port for resolving a user's chosen program focus.
///
/// The accounts module owns the user record; the server wires an adapter
/// over it so the today view can pick themed scripture without this module
/// depending on accounts internals.
#[async_trait]
pub trait GoalSource: Send + Sync {
    async fn reset_goal(&self, user_id: Uuid) -> anyhow::Result<ResetGoal>;
}
