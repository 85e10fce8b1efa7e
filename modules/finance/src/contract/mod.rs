pub mod model;

pub use model::{BudgetMonth, GivingEntry, MonthlyReport, Transaction};
