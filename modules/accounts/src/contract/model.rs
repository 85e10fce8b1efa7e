use chrono::{DateTime, Utc};
use uuid::Uuid;

use reset_program::contract::model::ResetGoal;

/// Subscription tier. Billing itself is outside this service; only the
/// tier is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanTier {
    Free,
    Pro,
}

impl Default for PlanTier {
    fn default() -> Self {
        Self::Free
    }
}

impl PlanTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "pro" => Self::Pro,
            _ => Self::Free,
        }
    }
}

/// Safe user view; the credential hash never leaves the module.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub country: String,
    pub currency: String,
    pub timezone: String,
    pub plan: PlanTier,
    pub reset_goal: ResetGoal,
    pub onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for signup. The password arrives plain and is hashed by the
/// domain service before it touches storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Partial profile update; every field optional, closed set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
}

/// Payload for completing onboarding.
#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingProfile {
    pub country: String,
    pub currency: String,
    pub timezone: String,
    pub reset_goal: ResetGoal,
}
