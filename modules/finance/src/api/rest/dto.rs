use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contract::model::{
    BudgetCategory, BudgetMonth, BudgetUpsert, CategoryTotal, GivingEntry, GivingType,
    IncomeSource, MonthlyReport, NewGivingEntry, NewTransaction, Transaction, TransactionKind,
};
use crate::domain::catalog;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IncomeSourceDto {
    pub label: String,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetCategoryDto {
    pub name: String,
    pub planned_amount: f64,
    pub color: Option<String>,
}

/// REST DTO for a monthly budget document.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetDto {
    pub id: Uuid,
    pub month: u32,
    pub year: i32,
    pub incomes: Vec<IncomeSourceDto>,
    pub categories: Vec<BudgetCategoryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Budget upsert payload. Replaces the stored document for (month, year)
/// whole; an omitted list means an empty list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BudgetUpsertReq {
    pub month: u32,
    pub year: i32,
    #[serde(default)]
    pub incomes: Vec<IncomeSourceDto>,
    #[serde(default)]
    pub categories: Vec<BudgetCategoryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TransactionDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    pub category_name: Option<String>,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTransactionReq {
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    pub category_name: Option<String>,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GivingDto {
    pub id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub date: DateTime<Utc>,
    #[schema(value_type = String)]
    pub giving_type: GivingType,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateGivingReq {
    pub amount: f64,
    pub currency: String,
    pub date: DateTime<Utc>,
    #[schema(value_type = String)]
    pub giving_type: GivingType,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryTotalDto {
    pub name: String,
    pub amount: f64,
}

/// REST DTO for the monthly report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportDto {
    pub month: u32,
    pub year: i32,
    pub income: f64,
    pub expenses: f64,
    pub net: f64,
    pub giving: f64,
    pub top_categories: Vec<CategoryTotalDto>,
    pub transaction_count: usize,
    pub giving_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DefaultCategoryDto {
    pub name: String,
    pub color: String,
    pub icon: String,
}

/// Month/year selector for budget reads and reports.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MonthQuery {
    pub month: u32,
    pub year: i32,
}

/// Optional month window plus limit for list endpoints.
#[derive(Debug, Clone, Deserialize, ToSchema, Default)]
pub struct ListQuery {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub limit: Option<u64>,
}

// Conversion implementations between REST DTOs and contract models

impl From<BudgetMonth> for BudgetDto {
    fn from(b: BudgetMonth) -> Self {
        Self {
            id: b.id,
            month: b.month,
            year: b.year,
            incomes: b.incomes.into_iter().map(Into::into).collect(),
            categories: b.categories.into_iter().map(Into::into).collect(),
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

impl From<IncomeSource> for IncomeSourceDto {
    fn from(i: IncomeSource) -> Self {
        Self {
            label: i.label,
            amount: i.amount,
            currency: i.currency,
        }
    }
}

impl From<BudgetCategory> for BudgetCategoryDto {
    fn from(c: BudgetCategory) -> Self {
        Self {
            name: c.name,
            planned_amount: c.planned_amount,
            color: c.color,
        }
    }
}

impl From<BudgetUpsertReq> for BudgetUpsert {
    fn from(req: BudgetUpsertReq) -> Self {
        Self {
            month: req.month,
            year: req.year,
            incomes: req
                .incomes
                .into_iter()
                .map(|i| IncomeSource {
                    label: i.label,
                    amount: i.amount,
                    currency: i.currency,
                })
                .collect(),
            categories: req
                .categories
                .into_iter()
                .map(|c| BudgetCategory {
                    name: c.name,
                    planned_amount: c.planned_amount,
                    color: c.color,
                })
                .collect(),
        }
    }
}

impl From<Transaction> for TransactionDto {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            kind: t.kind,
            amount: t.amount,
            currency: t.currency,
            category_name: t.category_name,
            date: t.date,
            note: t.note,
            created_at: t.created_at,
        }
    }
}

impl From<CreateTransactionReq> for NewTransaction {
    fn from(req: CreateTransactionReq) -> Self {
        Self {
            kind: req.kind,
            amount: req.amount,
            currency: req.currency,
            category_name: req.category_name,
            date: req.date,
            note: req.note,
        }
    }
}

impl From<GivingEntry> for GivingDto {
    fn from(g: GivingEntry) -> Self {
        Self {
            id: g.id,
            amount: g.amount,
            currency: g.currency,
            date: g.date,
            giving_type: g.giving_type,
            note: g.note,
            created_at: g.created_at,
        }
    }
}

impl From<CreateGivingReq> for NewGivingEntry {
    fn from(req: CreateGivingReq) -> Self {
        Self {
            amount: req.amount,
            currency: req.currency,
            date: req.date,
            giving_type: req.giving_type,
            note: req.note,
        }
    }
}

impl From<MonthlyReport> for ReportDto {
    fn from(r: MonthlyReport) -> Self {
        Self {
            month: r.month,
            year: r.year,
            income: r.income,
            expenses: r.expenses,
            net: r.net,
            giving: r.giving,
            top_categories: r
                .top_categories
                .into_iter()
                .map(|c| CategoryTotalDto {
                    name: c.name,
                    amount: c.amount,
                })
                .collect(),
            transaction_count: r.transaction_count,
            giving_count: r.giving_count,
        }
    }
}

pub fn default_categories() -> Vec<DefaultCategoryDto> {
    catalog::DEFAULT_CATEGORIES
        .iter()
        .map(|c| DefaultCategoryDto {
            name: c.name.to_string(),
            color: c.color.to_string(),
            icon: c.icon.to_string(),
        })
        .collect()
}
