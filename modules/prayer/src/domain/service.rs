use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{
    GoalPatch, NewPrayerEntry, NewPrayerGoal, PrayerEntry, PrayerGoal,
};
use crate::domain::error::DomainError;
use crate::domain::repo::{GoalInsert, PrayerRepository};

/// Hard cap on goals per (owner, month, year).
pub const MAX_GOALS_PER_MONTH: u64 = 3;
const ENTRY_LIST_CAP: u64 = 30;

/// Domain service for prayer goals and journal entries.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn PrayerRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn PrayerRepository>) -> Self {
        Self { repo }
    }

    /// Create a goal; the fourth goal for the same month is rejected with
    /// the capacity error.
    #[instrument(name = "prayer.service.create_goal", skip(self, new), fields(user_id = %user_id, month = new.month, year = new.year))]
    pub async fn create_goal(
        &self,
        user_id: Uuid,
        new: NewPrayerGoal,
    ) -> Result<PrayerGoal, DomainError> {
        if !(1..=12).contains(&new.month) {
            return Err(DomainError::validation("month", "must be between 1 and 12"));
        }
        if new.title.trim().is_empty() {
            return Err(DomainError::validation("title", "is required"));
        }

        let goal = PrayerGoal {
            id: Uuid::new_v4(),
            user_id,
            month: new.month,
            year: new.year,
            title: new.title.trim().to_string(),
            notes: new.notes,
            completed: false,
            linked_to_finance: new.linked_to_finance,
            created_at: Utc::now(),
        };

        match self
            .repo
            .insert_goal_capped(goal, MAX_GOALS_PER_MONTH)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            GoalInsert::Inserted(goal) => {
                info!("Prayer goal created");
                Ok(goal)
            }
            GoalInsert::LimitReached => {
                Err(DomainError::goal_limit_reached(new.month, new.year))
            }
        }
    }

    #[instrument(name = "prayer.service.list_goals", skip(self), fields(user_id = %user_id))]
    pub async fn list_goals(
        &self,
        user_id: Uuid,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Vec<PrayerGoal>, DomainError> {
        let month_year = match (month, year) {
            (Some(m), Some(y)) => {
                if !(1..=12).contains(&m) {
                    return Err(DomainError::validation("month", "must be between 1 and 12"));
                }
                Some((m, y))
            }
            _ => None,
        };
        self.repo
            .list_goals(user_id, month_year)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Closed patch; an id that isn't the caller's reports not-found.
    #[instrument(name = "prayer.service.update_goal", skip(self, patch), fields(user_id = %user_id, id = %id))]
    pub async fn update_goal(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: GoalPatch,
    ) -> Result<PrayerGoal, DomainError> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(DomainError::validation("title", "is required"));
            }
        }

        self.repo
            .update_goal(user_id, id, patch)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::goal_not_found(id))
    }

    /// Owner-scoped delete; a miss is a silent no-op.
    #[instrument(name = "prayer.service.delete_goal", skip(self), fields(user_id = %user_id, id = %id))]
    pub async fn delete_goal(&self, user_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        let deleted = self
            .repo
            .delete_goal(user_id, id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !deleted {
            debug!("Delete matched no owned goal");
        }
        Ok(())
    }

    #[instrument(name = "prayer.service.create_entry", skip(self, new), fields(user_id = %user_id))]
    pub async fn create_entry(
        &self,
        user_id: Uuid,
        new: NewPrayerEntry,
    ) -> Result<PrayerEntry, DomainError> {
        if new.content.trim().is_empty() {
            return Err(DomainError::validation("content", "is required"));
        }
        self.repo
            .insert_entry(user_id, new)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// The journal, newest first, capped at 30.
    #[instrument(name = "prayer.service.list_entries", skip(self), fields(user_id = %user_id))]
    pub async fn list_entries(&self, user_id: Uuid) -> Result<Vec<PrayerEntry>, DomainError> {
        self.repo
            .list_entries(user_id, ENTRY_LIST_CAP)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(name = "prayer.service.delete_entry", skip(self), fields(user_id = %user_id, id = %id))]
    pub async fn delete_entry(&self, user_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        let deleted = self
            .repo
            .delete_entry(user_id, id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !deleted {
            debug!("Delete matched no owned entry");
        }
        Ok(())
    }
}
