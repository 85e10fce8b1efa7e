pub mod budget_month;
pub mod giving_entry;
pub mod transaction;
