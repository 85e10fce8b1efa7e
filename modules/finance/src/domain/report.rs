//! The monthly reporting rollup: a pure function over the owner's records
//! in the month window. Amounts are summed as raw numbers regardless of
//! currency; mixing currencies is a known product question, deliberately
//! not "fixed" here.

use crate::contract::model::{
    CategoryTotal, GivingEntry, MonthlyReport, Transaction, TransactionKind,
};

const TOP_CATEGORY_COUNT: usize = 5;
const UNCATEGORIZED: &str = "Uncategorized";

pub fn build_report(
    month: u32,
    year: i32,
    transactions: &[Transaction],
    giving_entries: &[GivingEntry],
) -> MonthlyReport {
    let income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Income)
        .map(|t| t.amount)
        .sum();
    let expenses: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Expense)
        .map(|t| t.amount)
        .sum();
    let giving: f64 = giving_entries.iter().map(|g| g.amount).sum();

    MonthlyReport {
        month,
        year,
        income,
        expenses,
        net: income - expenses,
        giving,
        top_categories: top_categories(transactions),
        transaction_count: transactions.len(),
        giving_count: giving_entries.len(),
    }
}

/// Expense totals per category, descending by amount, top five. Missing or
/// empty category names group under "Uncategorized". The sort is stable, so
/// equal totals keep first-encounter order.
fn top_categories(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for t in transactions.iter().filter(|t| t.kind == TransactionKind::Expense) {
        let name = match t.category_name.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => UNCATEGORIZED,
        };
        match totals.iter_mut().find(|c| c.name == name) {
            Some(entry) => entry.amount += t.amount,
            None => totals.push(CategoryTotal {
                name: name.to_string(),
                amount: t.amount,
            }),
        }
    }

    totals.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    totals.truncate(TOP_CATEGORY_COUNT);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn tx(kind: TransactionKind, amount: f64, category: Option<&str>) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind,
            amount,
            currency: "USD".to_string(),
            category_name: category.map(str::to_string),
            date: Utc::now(),
            note: None,
            created_at: Utc::now(),
        }
    }

    fn gift(amount: f64) -> GivingEntry {
        GivingEntry {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            amount,
            currency: "USD".to_string(),
            date: Utc::now(),
            giving_type: crate::contract::model::GivingType::Tithe,
            note: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn worked_example() {
        // Two Food expenses and one income in the window.
        let transactions = vec![
            tx(TransactionKind::Expense, 50.0, Some("Food")),
            tx(TransactionKind::Expense, 30.0, Some("Food")),
            tx(TransactionKind::Income, 1000.0, None),
        ];
        let report = build_report(3, 2026, &transactions, &[]);

        assert_eq!(report.income, 1000.0);
        assert_eq!(report.expenses, 80.0);
        assert_eq!(report.net, 920.0);
        assert_eq!(report.giving, 0.0);
        assert_eq!(report.transaction_count, 3);
        assert_eq!(report.top_categories.len(), 1);
        assert_eq!(report.top_categories[0].name, "Food");
        assert_eq!(report.top_categories[0].amount, 80.0);
    }

    #[test]
    fn missing_category_groups_as_uncategorized() {
        let transactions = vec![
            tx(TransactionKind::Expense, 10.0, None),
            tx(TransactionKind::Expense, 5.0, Some("")),
        ];
        let report = build_report(1, 2026, &transactions, &[]);
        assert_eq!(report.top_categories.len(), 1);
        assert_eq!(report.top_categories[0].name, "Uncategorized");
        assert_eq!(report.top_categories[0].amount, 15.0);
    }

    #[test]
    fn top_five_descending_with_stable_ties() {
        let transactions = vec![
            tx(TransactionKind::Expense, 10.0, Some("A")),
            tx(TransactionKind::Expense, 40.0, Some("B")),
            tx(TransactionKind::Expense, 10.0, Some("C")),
            tx(TransactionKind::Expense, 20.0, Some("D")),
            tx(TransactionKind::Expense, 30.0, Some("E")),
            tx(TransactionKind::Expense, 5.0, Some("F")),
        ];
        let report = build_report(1, 2026, &transactions, &[]);
        let names: Vec<&str> = report
            .top_categories
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        // A and C tie at 10; A was encountered first and stays ahead.
        assert_eq!(names, vec!["B", "E", "D", "A", "C"]);
    }

    #[test]
    fn income_never_enters_the_category_rollup() {
        let transactions = vec![
            tx(TransactionKind::Income, 500.0, Some("Salary")),
            tx(TransactionKind::Expense, 20.0, Some("Food")),
        ];
        let report = build_report(1, 2026, &transactions, &[]);
        assert_eq!(report.top_categories.len(), 1);
        assert_eq!(report.top_categories[0].name, "Food");
    }

    #[test]
    fn giving_totals_are_separate() {
        let report = build_report(1, 2026, &[], &[gift(25.0), gift(75.0)]);
        assert_eq!(report.giving, 100.0);
        assert_eq!(report.giving_count, 2);
        assert_eq!(report.income, 0.0);
    }

    #[test]
    fn mixed_currency_amounts_sum_raw() {
        // Known limitation preserved from the source: no conversion.
        let mut eur = tx(TransactionKind::Expense, 10.0, Some("Travel"));
        eur.currency = "EUR".to_string();
        let usd = tx(TransactionKind::Expense, 10.0, Some("Travel"));
        let report = build_report(1, 2026, &[eur, usd], &[]);
        assert_eq!(report.expenses, 20.0);
    }
}
