use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::contract::model::{
    BudgetMonth, BudgetUpsert, GivingEntry, MonthlyReport, NewGivingEntry, NewTransaction,
    Transaction,
};
use crate::domain::error::DomainError;
use crate::domain::repo::FinanceRepository;
use crate::domain::{report, window};

const DEFAULT_LIST_LIMIT: u64 = 100;
const GIVING_LIST_CAP: u64 = 100;
const MIN_BUDGET_YEAR: i32 = 2020;

/// Domain service for budgets, transactions, giving, and reports.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn FinanceRepository>,
}

impl Service {
    pub fn new(repo: Arc<dyn FinanceRepository>) -> Self {
        Self { repo }
    }

    // ---- budget ----

    #[instrument(name = "finance.service.get_budget", skip(self), fields(user_id = %user_id))]
    pub async fn get_budget(
        &self,
        user_id: Uuid,
        month: u32,
        year: i32,
    ) -> Result<Option<BudgetMonth>, DomainError> {
        validate_month(month)?;
        self.repo
            .find_budget(user_id, month, year)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Replace the owner's budget for (month, year) with the given document.
    #[instrument(name = "finance.service.upsert_budget", skip(self, upsert), fields(user_id = %user_id, month = upsert.month, year = upsert.year))]
    pub async fn upsert_budget(
        &self,
        user_id: Uuid,
        upsert: BudgetUpsert,
    ) -> Result<BudgetMonth, DomainError> {
        validate_month(upsert.month)?;
        if upsert.year < MIN_BUDGET_YEAR {
            return Err(DomainError::validation("year", "must be 2020 or later"));
        }
        for income in &upsert.incomes {
            if income.label.trim().is_empty() {
                return Err(DomainError::validation("incomes.label", "is required"));
            }
            if income.amount <= 0.0 {
                return Err(DomainError::validation("incomes.amount", "must be positive"));
            }
            validate_currency(&income.currency, "incomes.currency")?;
        }
        for category in &upsert.categories {
            if category.name.trim().is_empty() {
                return Err(DomainError::validation("categories.name", "is required"));
            }
            if category.planned_amount < 0.0 {
                return Err(DomainError::validation(
                    "categories.planned_amount",
                    "must not be negative",
                ));
            }
        }

        let budget = self
            .repo
            .replace_budget(user_id, upsert)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        info!("Budget stored");
        Ok(budget)
    }

    // ---- transactions ----

    #[instrument(name = "finance.service.create_transaction", skip(self, new), fields(user_id = %user_id))]
    pub async fn create_transaction(
        &self,
        user_id: Uuid,
        new: NewTransaction,
    ) -> Result<Transaction, DomainError> {
        if new.amount <= 0.0 {
            return Err(DomainError::validation("amount", "must be positive"));
        }
        validate_currency(&new.currency, "currency")?;

        let tx = Transaction {
            id: Uuid::new_v4(),
            user_id,
            kind: new.kind,
            amount: new.amount,
            currency: new.currency,
            category_name: new.category_name,
            date: new.date,
            note: new.note,
            created_at: Utc::now(),
        };
        self.repo
            .insert_transaction(tx.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        Ok(tx)
    }

    /// Owner's transactions, newest first. A (month, year) pair narrows to
    /// that calendar month; the caller-supplied limit defaults to 100.
    #[instrument(name = "finance.service.list_transactions", skip(self), fields(user_id = %user_id))]
    pub async fn list_transactions(
        &self,
        user_id: Uuid,
        month: Option<u32>,
        year: Option<i32>,
        limit: Option<u64>,
    ) -> Result<Vec<Transaction>, DomainError> {
        let window = self.resolve_window(month, year)?;
        self.repo
            .list_transactions(user_id, window, Some(limit.unwrap_or(DEFAULT_LIST_LIMIT)))
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    /// Owner-scoped delete; a foreign or unknown id is a silent no-op.
    #[instrument(name = "finance.service.delete_transaction", skip(self), fields(user_id = %user_id, id = %id))]
    pub async fn delete_transaction(&self, user_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        let deleted = self
            .repo
            .delete_transaction(user_id, id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !deleted {
            debug!("Delete matched no owned transaction");
        }
        Ok(())
    }

    // ---- giving ----

    #[instrument(name = "finance.service.create_giving", skip(self, new), fields(user_id = %user_id))]
    pub async fn create_giving(
        &self,
        user_id: Uuid,
        new: NewGivingEntry,
    ) -> Result<GivingEntry, DomainError> {
        if new.amount <= 0.0 {
            return Err(DomainError::validation("amount", "must be positive"));
        }
        validate_currency(&new.currency, "currency")?;

        let entry = GivingEntry {
            id: Uuid::new_v4(),
            user_id,
            amount: new.amount,
            currency: new.currency,
            date: new.date,
            giving_type: new.giving_type,
            note: new.note,
            created_at: Utc::now(),
        };
        self.repo
            .insert_giving(entry.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        Ok(entry)
    }

    #[instrument(name = "finance.service.list_giving", skip(self), fields(user_id = %user_id))]
    pub async fn list_giving(
        &self,
        user_id: Uuid,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Vec<GivingEntry>, DomainError> {
        let window = self.resolve_window(month, year)?;
        self.repo
            .list_giving(user_id, window, Some(GIVING_LIST_CAP))
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    #[instrument(name = "finance.service.delete_giving", skip(self), fields(user_id = %user_id, id = %id))]
    pub async fn delete_giving(&self, user_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        let deleted = self
            .repo
            .delete_giving(user_id, id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !deleted {
            debug!("Delete matched no owned giving entry");
        }
        Ok(())
    }

    // ---- reports ----

    /// The monthly rollup. A pure read: two owner-scoped window queries,
    /// then arithmetic; nothing is written.
    #[instrument(name = "finance.service.monthly_report", skip(self), fields(user_id = %user_id, month, year))]
    pub async fn monthly_report(
        &self,
        user_id: Uuid,
        month: u32,
        year: i32,
    ) -> Result<MonthlyReport, DomainError> {
        validate_month(month)?;
        let window = window::month_window(month, year)
            .ok_or_else(|| DomainError::validation("month", "is out of range"))?;

        let transactions = self
            .repo
            .list_transactions(user_id, Some(window), None)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        let giving = self
            .repo
            .list_giving(user_id, Some(window), None)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(report::build_report(month, year, &transactions, &giving))
    }

    fn resolve_window(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Option<crate::domain::repo::DateWindow>, DomainError> {
        match (month, year) {
            (Some(m), Some(y)) => {
                validate_month(m)?;
                Ok(Some(window::month_window(m, y).ok_or_else(|| {
                    DomainError::validation("month", "is out of range")
                })?))
            }
            _ => Ok(None),
        }
    }
}

fn validate_month(month: u32) -> Result<(), DomainError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(DomainError::validation("month", "must be between 1 and 12"))
    }
}

fn validate_currency(currency: &str, field: &str) -> Result<(), DomainError> {
    if currency.trim().chars().count() < 3 {
        return Err(DomainError::validation(field, "must be at least 3 characters"));
    }
    Ok(())
}
