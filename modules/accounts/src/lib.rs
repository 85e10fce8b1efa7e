//! User accounts: signup, credential login, profile, onboarding, and the
//! static country/currency/goal catalogs.

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
