//! Prayer tracking: up to three goals per month and an append-only
//! journal of dated entries.

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
