//! SeaORM-backed repository for reset plans.
//!
//! The task-completion path is the one mutation with real concurrent-write
//! exposure, so it runs as a transaction whose membership insert is an
//! `ON CONFLICT DO NOTHING`; the streak only moves when that insert
//! actually landed a row. Two racing completions of the same task cannot
//! both advance the streak.

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::contract::model::{NewReflection, PlanPatch, ResetPlan};
use crate::domain::repo::PlansRepository;
use crate::domain::streak;
use crate::infra::storage::entity::{completed_task, plan, reflection};
use crate::infra::storage::mapper;

pub struct SeaOrmPlansRepository {
    db: DatabaseConnection,
}

impl SeaOrmPlansRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_row<C>(conn: &C, user_id: Uuid) -> anyhow::Result<Option<plan::Model>>
    where
        C: ConnectionTrait,
    {
        plan::Entity::find()
            .filter(plan::Column::UserId.eq(user_id))
            .one(conn)
            .await
            .context("find plan by user failed")
    }

    async fn assemble<C>(conn: &C, row: plan::Model) -> anyhow::Result<ResetPlan>
    where
        C: ConnectionTrait,
    {
        let completed = completed_task::Entity::find()
            .filter(completed_task::Column::PlanId.eq(row.id))
            .order_by_asc(completed_task::Column::CompletedAt)
            .all(conn)
            .await
            .context("load completed tasks failed")?;

        let reflections = reflection::Entity::find()
            .filter(reflection::Column::PlanId.eq(row.id))
            .order_by_asc(reflection::Column::CompletedAt)
            .all(conn)
            .await
            .context("load reflections failed")?;

        Ok(mapper::assemble_plan(row, completed, reflections))
    }
}

#[async_trait]
impl PlansRepository for SeaOrmPlansRepository {
    async fn find_by_user(&self, user_id: Uuid) -> anyhow::Result<Option<ResetPlan>> {
        match Self::find_row(&self.db, user_id).await? {
            Some(row) => Ok(Some(Self::assemble(&self.db, row).await?)),
            None => Ok(None),
        }
    }

    async fn create_if_absent(
        &self,
        user_id: Uuid,
        start_date: DateTime<Utc>,
    ) -> anyhow::Result<ResetPlan> {
        let am = plan::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            start_date: Set(start_date),
            streak: Set(0),
            last_completed_date: Set(None),
            created_at: Set(Utc::now()),
        };

        // The unique user_id constraint turns a concurrent double-create
        // into a no-op for the loser.
        plan::Entity::insert(am)
            .on_conflict(
                OnConflict::column(plan::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert plan failed")?;

        let row = Self::find_row(&self.db, user_id)
            .await?
            .context("plan missing right after upsert")?;
        Self::assemble(&self.db, row).await
    }

    async fn complete_task(
        &self,
        user_id: Uuid,
        task_id: &str,
        today: NaiveDate,
    ) -> anyhow::Result<Option<()>> {
        let tx = self.db.begin().await.context("begin transaction failed")?;

        let Some(row) = Self::find_row(&tx, user_id).await? else {
            tx.rollback().await.ok();
            return Ok(None);
        };

        let inserted = completed_task::Entity::insert(completed_task::ActiveModel {
            plan_id: Set(row.id),
            task_id: Set(task_id.to_string()),
            completed_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                completed_task::Column::PlanId,
                completed_task::Column::TaskId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&tx)
        .await
        .context("insert completed task failed")?;

        if inserted > 0 {
            let next = streak::advance(row.streak.max(0) as u32, row.last_completed_date, today);
            let mut am = row.into_active_model();
            am.streak = Set(next as i32);
            am.last_completed_date = Set(Some(today));
            am.update(&tx).await.context("update plan streak failed")?;
        }

        tx.commit().await.context("commit transaction failed")?;
        Ok(Some(()))
    }

    async fn append_reflection(
        &self,
        user_id: Uuid,
        new: NewReflection,
        completed_at: DateTime<Utc>,
    ) -> anyhow::Result<bool> {
        let Some(row) = Self::find_row(&self.db, user_id).await? else {
            return Ok(false);
        };

        let am = reflection::ActiveModel {
            id: Set(Uuid::new_v4()),
            plan_id: Set(row.id),
            week: Set(new.week as i32),
            wins: Set(new.wins),
            challenges: Set(new.challenges),
            next_steps: Set(new.next_steps),
            completed_at: Set(completed_at),
        };
        am.insert(&self.db)
            .await
            .context("insert reflection failed")?;
        Ok(true)
    }

    async fn apply_patch(&self, user_id: Uuid, patch: PlanPatch) -> anyhow::Result<bool> {
        let Some(row) = Self::find_row(&self.db, user_id).await? else {
            return Ok(false);
        };

        let mut am = row.into_active_model();
        if let Some(start_date) = patch.start_date {
            am.start_date = Set(start_date);
        }
        if let Some(streak) = patch.streak {
            am.streak = Set(streak as i32);
        }
        if let Some(date) = patch.last_completed_date {
            am.last_completed_date = Set(Some(date));
        }
        am.update(&self.db).await.context("patch plan failed")?;
        Ok(true)
    }
}
