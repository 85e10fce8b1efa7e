use crate::contract::model::{
    BudgetCategory, BudgetMonth, GivingEntry, GivingType, IncomeSource, Transaction,
    TransactionKind,
};
use crate::infra::storage::entity::{budget_month, giving_entry, transaction};

pub fn budget_to_contract(row: budget_month::Model) -> BudgetMonth {
    BudgetMonth {
        id: row.id,
        user_id: row.user_id,
        month: row.month.max(0) as u32,
        year: row.year,
        incomes: row
            .incomes
            .0
            .into_iter()
            .map(|i| IncomeSource {
                label: i.label,
                amount: i.amount,
                currency: i.currency,
            })
            .collect(),
        categories: row
            .categories
            .0
            .into_iter()
            .map(|c| BudgetCategory {
                name: c.name,
                planned_amount: c.planned_amount,
                color: c.color,
            })
            .collect(),
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

pub fn transaction_to_contract(row: transaction::Model) -> Transaction {
    Transaction {
        id: row.id,
        user_id: row.user_id,
        kind: TransactionKind::from_str_or_default(&row.kind),
        amount: row.amount,
        currency: row.currency,
        category_name: row.category_name,
        date: row.date,
        note: row.note,
        created_at: row.created_at,
    }
}

pub fn giving_to_contract(row: giving_entry::Model) -> GivingEntry {
    GivingEntry {
        id: row.id,
        user_id: row.user_id,
        amount: row.amount,
        currency: row.currency,
        date: row.date,
        giving_type: GivingType::from_str_or_default(&row.giving_type),
        note: row.note,
        created_at: row.created_at,
    }
}
