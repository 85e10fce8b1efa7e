use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{NewReflection, PlanPatch, ResetGoal, ResetPlan};
use crate::domain::error::DomainError;
use crate::domain::ports::GoalSource;
use crate::domain::program::{self, DayTask, Scripture};
use crate::domain::repo::PlansRepository;

/// What the "today" view presents: the active task with its scripture.
#[derive(Debug, Clone, Copy)]
pub struct TodayView {
    pub day_number: u32,
    pub streak: u32,
    pub task: &'static DayTask,
    pub scripture: &'static Scripture,
}

/// Reset Progress Engine. Owns all plan mutations; plan creation happens
/// only through [`Service::ensure_plan`], which onboarding calls.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn PlansRepository>,
    goals: Arc<dyn GoalSource>,
}

impl Service {
    pub fn new(repo: Arc<dyn PlansRepository>, goals: Arc<dyn GoalSource>) -> Self {
        Self { repo, goals }
    }

    /// The owner's plan, or None before onboarding has run. Absence is a
    /// normal result here, not an error.
    #[instrument(name = "reset_program.service.get_plan", skip(self), fields(user_id = %user_id))]
    pub async fn get_plan(&self, user_id: Uuid) -> Result<Option<ResetPlan>, DomainError> {
        self.repo
            .find_by_user(user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Create the plan if missing; returns the plan either way.
    #[instrument(name = "reset_program.service.ensure_plan", skip(self), fields(user_id = %user_id))]
    pub async fn ensure_plan(&self, user_id: Uuid) -> Result<ResetPlan, DomainError> {
        let plan = self
            .repo
            .create_if_absent(user_id, Utc::now())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        debug!("Plan ready, {} tasks completed", plan.completed_task_ids.len());
        Ok(plan)
    }

    /// Today's task and scripture for the owner's position in the program.
    #[instrument(name = "reset_program.service.today", skip(self), fields(user_id = %user_id))]
    pub async fn today(&self, user_id: Uuid) -> Result<TodayView, DomainError> {
        let plan = self
            .get_plan(user_id)
            .await?
            .ok_or_else(|| DomainError::plan_not_found(user_id))?;

        // A missing or unreadable profile falls back to the default focus,
        // same as an un-onboarded client would.
        let goal = self
            .goals
            .reset_goal(user_id)
            .await
            .unwrap_or(ResetGoal::BudgetDiscipline);

        let day_index = plan.day_index();
        Ok(TodayView {
            day_number: program::day_number(day_index),
            streak: plan.streak,
            task: program::task_for_day(day_index),
            scripture: program::daily_scripture(goal, day_index),
        })
    }

    /// Mark a task completed. Idempotent: a task already in the completed
    /// set changes nothing, including the streak.
    #[instrument(
        name = "reset_program.service.complete_task",
        skip(self),
        fields(user_id = %user_id, task_id = %task_id)
    )]
    pub async fn complete_task(
        &self,
        user_id: Uuid,
        task_id: &str,
    ) -> Result<ResetPlan, DomainError> {
        if program::task_by_id(task_id).is_none() {
            return Err(DomainError::unknown_task(task_id));
        }

        let today = Utc::now().date_naive();
        self.repo
            .complete_task(user_id, task_id, today)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::plan_not_found(user_id))?;

        info!("Task completion applied");
        self.require_plan(user_id).await
    }

    /// Append a weekly reflection; prior entries are never edited.
    #[instrument(
        name = "reset_program.service.add_reflection",
        skip(self, reflection),
        fields(user_id = %user_id, week = reflection.week)
    )]
    pub async fn add_reflection(
        &self,
        user_id: Uuid,
        reflection: NewReflection,
    ) -> Result<ResetPlan, DomainError> {
        if !(1..=12).contains(&reflection.week) {
            return Err(DomainError::validation("week", "must be between 1 and 12"));
        }

        let appended = self
            .repo
            .append_reflection(user_id, reflection, Utc::now())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !appended {
            return Err(DomainError::plan_not_found(user_id));
        }

        self.require_plan(user_id).await
    }

    /// Administrative field patch; never touches the streak logic.
    #[instrument(name = "reset_program.service.patch_plan", skip(self, patch), fields(user_id = %user_id))]
    pub async fn patch_plan(
        &self,
        user_id: Uuid,
        patch: PlanPatch,
    ) -> Result<ResetPlan, DomainError> {
        if !patch.is_empty() {
            let applied = self
                .repo
                .apply_patch(user_id, patch)
                .await
                .map_err(|e| DomainError::database(e.to_string()))?;
            if !applied {
                return Err(DomainError::plan_not_found(user_id));
            }
        }

        self.require_plan(user_id).await
    }

    async fn require_plan(&self, user_id: Uuid) -> Result<ResetPlan, DomainError> {
        self.get_plan(user_id)
            .await?
            .ok_or_else(|| DomainError::plan_not_found(user_id))
    }
}
