//! The 90-day reset program: one plan per user, a fixed table of daily
//! tasks, completion tracking with a consecutive-day streak, and weekly
//! reflections.

// === PUBLIC CONTRACT ===
// Only the contract module should be public for other modules to consume
pub mod contract;

pub use contract::{client, error, model};

// === INTERNAL MODULES ===
// Exposed for integration tests; external consumers should stick to `contract`.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
