use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::contract::model::{NewReflection, PlanPatch, ResetPlan};

/// Port for the domain layer: persistence operations the engine needs.
///
/// Mutations are keyed by the owning user, never by plan id, so a caller can
/// only ever touch its own plan. Every method that targets an existing plan
/// reports absence instead of inventing one.
#[async_trait]
pub trait PlansRepository: Send + Sync {
    /// Load a user's assembled plan (row + completed set + reflections).
    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<ResetPlan>>;

    /// Insert a fresh plan unless the user already has one; returns the
    /// plan either way. Uniqueness on the owner makes concurrent calls safe.
    async fn create_if_absent(
        &self,
        user_id: Uuid,
        start_date: DateTime<Utc>,
    ) -> anyhow::Result<ResetPlan>;

    /// Record a task completion as one atomic conditional update: add the
    /// task to the completed set, and only when it was actually absent
    /// recompute the streak and stamp `last_completed_date = today`.
    ///
    /// Returns `None` when the user has no plan.
    async fn complete_task(
        &self,
        user_id: Uuid,
        task_id: &str,
        today: NaiveDate,
    ) -> anyhow::Result<Option<()>>;

    /// Append a weekly reflection with a server timestamp. Returns false
    /// when the user has no plan.
    async fn append_reflection(
        &self,
        user_id: Uuid,
        reflection: NewReflection,
        completed_at: DateTime<Utc>,
    ) -> anyhow::Result<bool>;

    /// Apply an administrative field patch. Returns false when the user has
    /// no plan.
    async fn apply_patch(&self, user_id: Uuid, patch: PlanPatch) -> anyhow::Result<bool>;
}
