pub mod client;
pub mod error;
pub mod model;

pub use client::ResetProgramApi;
pub use error::ResetProgramError;
pub use model::{ResetGoal, ResetPlan, WeeklyReflection};
