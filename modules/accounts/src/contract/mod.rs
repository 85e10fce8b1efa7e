pub mod model;

pub use model::{NewUser, PlanTier, User};
