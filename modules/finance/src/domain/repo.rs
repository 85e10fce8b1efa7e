use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::model::{BudgetMonth, BudgetUpsert, GivingEntry, Transaction};

pub type DateWindow = (DateTime<Utc>, DateTime<Utc>);

/// Port for the domain layer: persistence operations the finance services
/// need. Everything is owner-scoped; deletes report whether a row went away
/// so the service can log, but a miss is not an error.
#[async_trait]
pub trait FinanceRepository: Send + Sync {
    async fn find_budget(
        &self,
        user_id: Uuid,
        month: u32,
        year: i32,
    ) -> anyhow::Result<Option<BudgetMonth>>;

    /// Replace the owner's budget document for (month, year), creating it
    /// if absent. Whole-document semantics: the stored lists become exactly
    /// the given lists.
    async fn replace_budget(
        &self,
        user_id: Uuid,
        upsert: BudgetUpsert,
    ) -> anyhow::Result<BudgetMonth>;

    async fn insert_transaction(&self, tx: Transaction) -> anyhow::Result<()>;

    /// Owner's transactions, newest first, optionally bounded to a date
    /// window, capped at `limit`.
    async fn list_transactions(
        &self,
        user_id: Uuid,
        window: Option<DateWindow>,
        limit: Option<u64>,
    ) -> anyhow::Result<Vec<Transaction>>;

    /// Delete by id within the owner's records. Returns true if a row was
    /// deleted; a foreign or unknown id deletes nothing.
    async fn delete_transaction(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;

    async fn insert_giving(&self, entry: GivingEntry) -> anyhow::Result<()>;

    async fn list_giving(
        &self,
        user_id: Uuid,
        window: Option<DateWindow>,
        limit: Option<u64>,
    ) -> anyhow::Result<Vec<GivingEntry>>;

    async fn delete_giving(&self, user_id: Uuid, id: Uuid) -> anyhow::Result<bool>;
}
