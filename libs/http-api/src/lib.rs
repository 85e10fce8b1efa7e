//! Shared HTTP API plumbing: RFC 9457 problem responses and bearer-token
//! session handling. Module crates map their domain errors onto `Problem`
//! and take the caller's identity as an explicit [`auth::CurrentUser`]
//! argument; nothing here reads ambient state.

pub mod auth;
pub mod problem;

pub use auth::{AuthTokens, CurrentUser};
pub use problem::{Problem, ProblemResponse};
