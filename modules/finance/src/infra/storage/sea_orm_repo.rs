use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::contract::model::{BudgetMonth, BudgetUpsert, GivingEntry, Transaction};
use crate::domain::repo::{DateWindow, FinanceRepository};
use crate::infra::storage::entity::budget_month::{
    self, BudgetCategories, BudgetCategoryJson, IncomeSourceJson, IncomeSources,
};
use crate::infra::storage::entity::{giving_entry, transaction};
use crate::infra::storage::mapper;

pub struct SeaOrmFinanceRepository {
    db: DatabaseConnection,
}

impl SeaOrmFinanceRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FinanceRepository for SeaOrmFinanceRepository {
    async fn find_budget(
        &self,
        user_id: Uuid,
        month: u32,
        year: i32,
    ) -> anyhow::Result<Option<BudgetMonth>> {
        let found = budget_month::Entity::find()
            .filter(budget_month::Column::UserId.eq(user_id))
            .filter(budget_month::Column::Month.eq(month as i32))
            .filter(budget_month::Column::Year.eq(year))
            .one(&self.db)
            .await
            .context("find budget failed")?;
        Ok(found.map(mapper::budget_to_contract))
    }

    async fn replace_budget(
        &self,
        user_id: Uuid,
        upsert: BudgetUpsert,
    ) -> anyhow::Result<BudgetMonth> {
        let now = Utc::now();
        let incomes = IncomeSources(
            upsert
                .incomes
                .into_iter()
                .map(|i| IncomeSourceJson {
                    label: i.label,
                    amount: i.amount,
                    currency: i.currency,
                })
                .collect(),
        );
        let categories = BudgetCategories(
            upsert
                .categories
                .into_iter()
                .map(|c| BudgetCategoryJson {
                    name: c.name,
                    planned_amount: c.planned_amount,
                    color: c.color,
                })
                .collect(),
        );

        let am = budget_month::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            month: Set(upsert.month as i32),
            year: Set(upsert.year),
            incomes: Set(incomes),
            categories: Set(categories),
            created_at: Set(now),
            updated_at: Set(now),
        };

        // Document-replace semantics on the (owner, month, year) key: an
        // existing row keeps its id but both lists are overwritten.
        budget_month::Entity::insert(am)
            .on_conflict(
                OnConflict::columns([
                    budget_month::Column::UserId,
                    budget_month::Column::Month,
                    budget_month::Column::Year,
                ])
                .update_columns([
                    budget_month::Column::Incomes,
                    budget_month::Column::Categories,
                    budget_month::Column::UpdatedAt,
                ])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("budget upsert failed")?;

        let stored = budget_month::Entity::find()
            .filter(budget_month::Column::UserId.eq(user_id))
            .filter(budget_month::Column::Month.eq(upsert.month as i32))
            .filter(budget_month::Column::Year.eq(upsert.year))
            .one(&self.db)
            .await
            .context("reload budget failed")?
            .context("budget missing right after upsert")?;
        Ok(mapper::budget_to_contract(stored))
    }

    async fn insert_transaction(&self, tx: Transaction) -> anyhow::Result<()> {
        let am = transaction::ActiveModel {
            id: Set(tx.id),
            user_id: Set(tx.user_id),
            kind: Set(tx.kind.as_str().to_string()),
            amount: Set(tx.amount),
            currency: Set(tx.currency),
            category_name: Set(tx.category_name),
            date: Set(tx.date),
            note: Set(tx.note),
            created_at: Set(tx.created_at),
        };
        let _ = am
            .insert(&self.db)
            .await
            .context("insert transaction failed")?;
        Ok(())
    }

    async fn list_transactions(
        &self,
        user_id: Uuid,
        window: Option<DateWindow>,
        limit: Option<u64>,
    ) -> anyhow::Result<Vec<Transaction>> {
        let mut query = transaction::Entity::find()
            .filter(transaction::Column::UserId.eq(user_id))
            .order_by_desc(transaction::Column::Date);
        if let Some((start, end)) = window {
            query = query
                .filter(transaction::Column::Date.gte(start))
                .filter(transaction::Column::Date.lte(end));
        }
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let rows = query
            .all(&self.db)
            .await
            .context("list transactions failed")?;
        Ok(rows.into_iter().map(mapper::transaction_to_contract).collect())
    }

    async fn delete_transaction(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let res = transaction::Entity::delete_many()
            .filter(transaction::Column::Id.eq(id))
            .filter(transaction::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete transaction failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn insert_giving(&self, entry: GivingEntry) -> anyhow::Result<()> {
        let am = giving_entry::ActiveModel {
            id: Set(entry.id),
            user_id: Set(entry.user_id),
            amount: Set(entry.amount),
            currency: Set(entry.currency),
            date: Set(entry.date),
            giving_type: Set(entry.giving_type.as_str().to_string()),
            note: Set(entry.note),
            created_at: Set(entry.created_at),
        };
        let _ = am.insert(&self.db).await.context("insert giving failed")?;
        Ok(())
    }

    async fn list_giving(
        &self,
        user_id: Uuid,
        window: Option<DateWindow>,
        limit: Option<u64>,
    ) -> anyhow::Result<Vec<GivingEntry>> {
        let mut query = giving_entry::Entity::find()
            .filter(giving_entry::Column::UserId.eq(user_id))
            .order_by_desc(giving_entry::Column::Date);
        if let Some((start, end)) = window {
            query = query
                .filter(giving_entry::Column::Date.gte(start))
                .filter(giving_entry::Column::Date.lte(end));
        }
        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let rows = query.all(&self.db).await.context("list giving failed")?;
        Ok(rows.into_iter().map(mapper::giving_to_contract).collect())
    }

    async fn delete_giving(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool> {
        let res = giving_entry::Entity::delete_many()
            .filter(giving_entry::Column::Id.eq(id))
            .filter(giving_entry::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete giving failed")?;
        Ok(res.rows_affected > 0)
    }
}
