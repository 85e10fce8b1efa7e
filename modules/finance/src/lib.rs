//! Personal finance records: monthly budgets, income/expense transactions,
//! giving entries, and the monthly reporting rollup.

// === PUBLIC CONTRACT ===
pub mod contract;

pub use contract::model;

// === INTERNAL MODULES ===
// Exposed for integration tests; external consumers should stick to `contract`.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
