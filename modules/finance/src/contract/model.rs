use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a ledger transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "income" => Self::Income,
            _ => Self::Expense,
        }
    }
}

/// Kind of charitable contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GivingType {
    Tithe,
    Offering,
    Seed,
    Charity,
}

impl GivingType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tithe => "tithe",
            Self::Offering => "offering",
            Self::Seed => "seed",
            Self::Charity => "charity",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "tithe" => Self::Tithe,
            "seed" => Self::Seed,
            "charity" => Self::Charity,
            _ => Self::Offering,
        }
    }
}

/// One income line of a monthly budget.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeSource {
    pub label: String,
    pub amount: f64,
    pub currency: String,
}

/// One planned spending category of a monthly budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetCategory {
    pub name: String,
    pub planned_amount: f64,
    pub color: Option<String>,
}

/// A user's budget for one calendar month; unique per (owner, month, year).
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetMonth {
    pub id: Uuid,
    pub user_id: Uuid,
    pub month: u32,
    pub year: i32,
    pub incomes: Vec<IncomeSource>,
    pub categories: Vec<BudgetCategory>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for the budget upsert. Replaces the stored document whole:
/// omitted lists come through empty and end up empty.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUpsert {
    pub month: u32,
    pub year: i32,
    pub incomes: Vec<IncomeSource>,
    pub categories: Vec<BudgetCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    pub category_name: Option<String>,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a transaction; id/timestamps are server-assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    pub category_name: Option<String>,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GivingEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub date: DateTime<Utc>,
    pub giving_type: GivingType,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGivingEntry {
    pub amount: f64,
    pub currency: String,
    pub date: DateTime<Utc>,
    pub giving_type: GivingType,
    pub note: Option<String>,
}

/// One rolled-up expense category in a monthly report.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: f64,
}

/// The monthly aggregation. Amounts are summed as raw numbers in whatever
/// currency each record carries; no conversion happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    pub giving: f64,
    pub top_categories: Vec<CategoryTotal>,
    pub transaction_count: usize,
    pub giving_count: usize,
}
