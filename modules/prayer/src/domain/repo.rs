use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::{GoalPatch, NewPrayerEntry, PrayerEntry, PrayerGoal};

/// Result of a capped goal insert.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalInsert {
    Inserted(PrayerGoal),
    /// The owner already holds the maximum number of goals for the month.
    LimitReached,
}

/// Port for the domain layer: persistence operations prayer tracking needs.
#[async_trait]
pub trait PrayerRepository: Send + Sync {
    /// Insert a goal unless the owner already has `cap` goals for the same
    /// (month, year). The count check and insert run in one transaction.
    async fn insert_goal_capped(&self, goal: PrayerGoal, cap: u64) -> anyhow::Result<GoalInsert>;

    /// Owner's goals, newest first, optionally narrowed to (month, year).
    async fn list_goals(
        &self,
        user_id: Uuid,
        month_year: Option<(u32, i32)>,
    ) -> anyhow::Result<Vec<PrayerGoal>>;

    /// Patch an owned goal; None when the id doesn't resolve for this owner.
    async fn update_goal(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: GoalPatch,
    ) -> anyhow::Result<Option<PrayerGoal>>;

    /// Delete by id within the owner's records; true if a row was deleted.
    async fn delete_goal(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;

    async fn insert_entry(&self, user_id: Uuid, entry: NewPrayerEntry)
        -> anyhow::Result<PrayerEntry>;

    /// Owner's journal, newest first, capped at `limit`.
    async fn list_entries(&self, user_id: Uuid, limit: u64) -> anyhow::Result<Vec<PrayerEntry>>;

    async fn delete_entry(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;
}
