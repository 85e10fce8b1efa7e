use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use reset_program::contract::model::ResetGoal;

use crate::contract::model::{
    Credentials, NewUser, OnboardingProfile, ProfilePatch, User,
};
use crate::domain::catalog;

/// REST DTO for the safe user view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub country: String,
    pub currency: String,
    pub timezone: String,
    pub plan: String,
    #[schema(value_type = String)]
    pub reset_goal: ResetGoal,
    pub onboarding_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// REST DTO for signup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupReq {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response for signup: the created identity, no session yet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginReq {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub token: String,
    pub user: UserDto,
}

/// Partial profile update (closed field set).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Default)]
pub struct ProfilePatchReq {
    pub name: Option<String>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OnboardingReq {
    pub country: String,
    pub currency: String,
    pub timezone: String,
    #[schema(value_type = String)]
    pub reset_goal: ResetGoal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChangePasswordReq {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryDto {
    pub code: String,
    pub name: String,
    /// Suggested currency for onboarding prefill, when known.
    pub suggested_currency: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrencyDto {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoalDto {
    #[schema(value_type = String)]
    pub value: ResetGoal,
    pub label: String,
    pub description: String,
}

/// Static locale and goal catalogs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogsDto {
    pub countries: Vec<CountryDto>,
    pub currencies: Vec<CurrencyDto>,
    pub reset_goals: Vec<GoalDto>,
}

// Conversion implementations between REST DTOs and contract models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            country: user.country,
            currency: user.currency,
            timezone: user.timezone,
            plan: user.plan.as_str().to_string(),
            reset_goal: user.reset_goal,
            onboarding_complete: user.onboarding_complete,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<SignupReq> for NewUser {
    fn from(req: SignupReq) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
        }
    }
}

impl From<LoginReq> for Credentials {
    fn from(req: LoginReq) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

impl From<ProfilePatchReq> for ProfilePatch {
    fn from(req: ProfilePatchReq) -> Self {
        Self {
            name: req.name,
            country: req.country,
            currency: req.currency,
            timezone: req.timezone,
        }
    }
}

impl From<OnboardingReq> for OnboardingProfile {
    fn from(req: OnboardingReq) -> Self {
        Self {
            country: req.country,
            currency: req.currency,
            timezone: req.timezone,
            reset_goal: req.reset_goal,
        }
    }
}

pub fn catalogs() -> CatalogsDto {
    CatalogsDto {
        countries: catalog::COUNTRIES
            .iter()
            .map(|c| CountryDto {
                code: c.code.to_string(),
                name: c.name.to_string(),
                suggested_currency: catalog::suggested_currency(c.code).map(str::to_string),
            })
            .collect(),
        currencies: catalog::CURRENCIES
            .iter()
            .map(|c| CurrencyDto {
                code: c.code.to_string(),
                name: c.name.to_string(),
            })
            .collect(),
        reset_goals: catalog::RESET_GOALS
            .iter()
            .map(|g| GoalDto {
                value: g.value,
                label: g.label.to_string(),
                description: g.description.to_string(),
            })
            .collect(),
    }
}
