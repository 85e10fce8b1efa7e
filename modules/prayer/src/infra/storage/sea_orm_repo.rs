use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::contract::model::{GoalPatch, NewPrayerEntry, PrayerEntry, PrayerGoal};
use crate::domain::repo::{GoalInsert, PrayerRepository};
use crate::infra::storage::entity::{entry, goal};
use crate::infra::storage::mapper;

pub struct SeaOrmPrayerRepository {
    db: DatabaseConnection,
}

impl SeaOrmPrayerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PrayerRepository for SeaOrmPrayerRepository {
    async fn insert_goal_capped(&self, new: PrayerGoal, cap: u64) -> anyhow::Result<GoalInsert> {
        // Count and insert inside one transaction so two racing creates
        // cannot both observe cap-1 on a serializing store.
        let tx = self.db.begin().await.context("begin transaction failed")?;

        let count = goal::Entity::find()
            .filter(goal::Column::UserId.eq(new.user_id))
            .filter(goal::Column::Month.eq(new.month as i32))
            .filter(goal::Column::Year.eq(new.year))
            .count(&tx)
            .await
            .context("count goals failed")?;
        if count >= cap {
            tx.rollback().await.ok();
            return Ok(GoalInsert::LimitReached);
        }

        let am = goal::ActiveModel {
            id: Set(new.id),
            user_id: Set(new.user_id),
            month: Set(new.month as i32),
            year: Set(new.year),
            title: Set(new.title.clone()),
            notes: Set(new.notes.clone()),
            completed: Set(new.completed),
            linked_to_finance: Set(new.linked_to_finance),
            created_at: Set(new.created_at),
        };
        let inserted = am.insert(&tx).await.context("insert goal failed")?;

        tx.commit().await.context("commit transaction failed")?;
        Ok(GoalInsert::Inserted(mapper::goal_to_contract(inserted)))
    }

    async fn list_goals(
        &self,
        user_id: Uuid,
        month_year: Option<(u32, i32)>,
    ) -> anyhow::Result<Vec<PrayerGoal>> {
        let mut query = goal::Entity::find()
            .filter(goal::Column::UserId.eq(user_id))
            .order_by_desc(goal::Column::CreatedAt);
        if let Some((month, year)) = month_year {
            query = query
                .filter(goal::Column::Month.eq(month as i32))
                .filter(goal::Column::Year.eq(year));
        }

        let rows = query.all(&self.db).await.context("list goals failed")?;
        Ok(rows.into_iter().map(mapper::goal_to_contract).collect())
    }

    async fn update_goal(
        &self,
        user_id: Uuid,
        id: Uuid,
        patch: GoalPatch,
    ) -> anyhow::Result<Option<PrayerGoal>> {
        // Owner filter in the lookup: a foreign id resolves to nothing.
        let Some(row) = goal::Entity::find()
            .filter(goal::Column::Id.eq(id))
            .filter(goal::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find goal failed")?
        else {
            return Ok(None);
        };

        // An all-None patch has nothing to write.
        if patch.is_empty() {
            return Ok(Some(mapper::goal_to_contract(row)));
        }

        let mut am = row.into_active_model();
        if let Some(title) = patch.title {
            am.title = Set(title.trim().to_string());
        }
        if let Some(notes) = patch.notes {
            am.notes = Set(Some(notes));
        }
        if let Some(completed) = patch.completed {
            am.completed = Set(completed);
        }
        if let Some(linked) = patch.linked_to_finance {
            am.linked_to_finance = Set(linked);
        }

        let updated = am.update(&self.db).await.context("update goal failed")?;
        Ok(Some(mapper::goal_to_contract(updated)))
    }

    async fn delete_goal(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let res = goal::Entity::delete_many()
            .filter(goal::Column::Id.eq(id))
            .filter(goal::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete goal failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn insert_entry(
        &self,
        user_id: Uuid,
        new: NewPrayerEntry,
    ) -> anyhow::Result<PrayerEntry> {
        let am = entry::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            date: Set(new.date),
            content: Set(new.content),
            created_at: Set(Utc::now()),
        };
        let inserted = am.insert(&self.db).await.context("insert entry failed")?;
        Ok(mapper::entry_to_contract(inserted))
    }

    async fn list_entries(&self, user_id: Uuid, limit: u64) -> anyhow::Result<Vec<PrayerEntry>> {
        let rows = entry::Entity::find()
            .filter(entry::Column::UserId.eq(user_id))
            .order_by_desc(entry::Column::Date)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list entries failed")?;
        Ok(rows.into_iter().map(mapper::entry_to_contract).collect())
    }

    async fn delete_entry(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let res = entry::Entity::delete_many()
            .filter(entry::Column::Id.eq(id))
            .filter(entry::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete entry failed")?;
        Ok(res.rows_affected > 0)
    }
}
