use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use http_api::auth::AuthTokens;
use reset_program::contract::client::ResetProgramApi;

use crate::contract::model::{
    Credentials, NewUser, OnboardingProfile, PlanTier, ProfilePatch, User,
};
use crate::domain::error::DomainError;
use crate::domain::repo::UsersRepository;

/// Configuration for the domain service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bcrypt_cost: u32,
    pub min_password_length: usize,
    pub min_name_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: 12,
            min_password_length: 8,
            min_name_length: 2,
        }
    }
}

/// Domain service with business rules for accounts.
/// Depends on the repository port and the reset-program contract, not on
/// infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    reset: Arc<dyn ResetProgramApi>,
    tokens: Arc<AuthTokens>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        reset: Arc<dyn ResetProgramApi>,
        tokens: Arc<AuthTokens>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            reset,
            tokens,
            config,
        }
    }

    /// Create an account. Emails are stored lowercased; duplicates are
    /// rejected case-insensitively.
    #[instrument(name = "accounts.service.signup", skip(self, new_user), fields(email = %new_user.email))]
    pub async fn signup(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new account");

        self.validate_signup(&new_user)?;
        let email = new_user.email.trim().to_lowercase();

        if self
            .repo
            .email_exists(&email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
        {
            return Err(DomainError::email_already_exists(email));
        }

        let password_hash = bcrypt::hash(&new_user.password, self.config.bcrypt_cost)
            .map_err(|e| DomainError::database(e.to_string()))?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email,
            name: new_user.name.trim().to_string(),
            country: "US".to_string(),
            currency: "USD".to_string(),
            timezone: "America/New_York".to_string(),
            plan: PlanTier::Free,
            reset_goal: Default::default(),
            onboarding_complete: false,
            created_at: now,
            updated_at: now,
        };

        self.repo
            .insert(user.clone(), password_hash)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Account created with id={}", user.id);
        Ok(user)
    }

    /// Verify credentials and issue a session token.
    #[instrument(name = "accounts.service.login", skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: Credentials) -> Result<(User, String), DomainError> {
        let email = credentials.email.trim().to_lowercase();

        let stored = self
            .repo
            .find_stored_by_email(&email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(DomainError::invalid_credentials)?;

        let valid = bcrypt::verify(&credentials.password, &stored.password_hash)
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !valid {
            return Err(DomainError::invalid_credentials());
        }

        let token = self
            .tokens
            .issue(stored.user.id)
            .map_err(|e| DomainError::database(e.to_string()))?;

        debug!("Login succeeded for {}", stored.user.id);
        Ok((stored.user, token))
    }

    #[instrument(name = "accounts.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    /// Apply a partial profile update.
    #[instrument(name = "accounts.service.update_profile", skip(self, patch), fields(user_id = %id))]
    pub async fn update_profile(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> Result<User, DomainError> {
        if let Some(name) = &patch.name {
            if name.trim().chars().count() < self.config.min_name_length {
                return Err(DomainError::validation("name", "must be at least 2 characters"));
            }
        }

        self.repo
            .apply_profile_patch(id, patch)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    /// Complete onboarding: store the locale/goal choices, flip the flag,
    /// and make sure the user's reset plan exists. Plan creation happens
    /// here and nowhere else.
    #[instrument(name = "accounts.service.onboard", skip(self, profile), fields(user_id = %id))]
    pub async fn onboard(
        &self,
        id: Uuid,
        profile: OnboardingProfile,
    ) -> Result<User, DomainError> {
        if profile.country.trim().chars().count() < 2 {
            return Err(DomainError::validation("country", "must be at least 2 characters"));
        }
        if profile.currency.trim().chars().count() < 3 {
            return Err(DomainError::validation("currency", "must be at least 3 characters"));
        }
        if profile.timezone.trim().is_empty() {
            return Err(DomainError::validation("timezone", "is required"));
        }

        let user = self
            .repo
            .apply_onboarding(id, profile)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        self.reset
            .ensure_plan(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Onboarding complete");
        Ok(user)
    }

    /// Change the password after verifying the current one.
    #[instrument(name = "accounts.service.change_password", skip_all, fields(user_id = %id))]
    pub async fn change_password(
        &self,
        id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), DomainError> {
        if new_password.chars().count() < self.config.min_password_length {
            return Err(DomainError::validation(
                "new_password",
                "must be at least 8 characters",
            ));
        }

        let hash = self
            .repo
            .find_password_hash(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        let valid = bcrypt::verify(current_password, &hash)
            .map_err(|e| DomainError::database(e.to_string()))?;
        if !valid {
            warn!("Password change rejected: current password mismatch");
            return Err(DomainError::validation(
                "current_password",
                "is incorrect",
            ));
        }

        let new_hash = bcrypt::hash(new_password, self.config.bcrypt_cost)
            .map_err(|e| DomainError::database(e.to_string()))?;
        self.repo
            .set_password_hash(id, new_hash)
            .await
            .map_err(|e| DomainError::database(e.to_string()))
    }

    fn validate_signup(&self, new_user: &NewUser) -> Result<(), DomainError> {
        if new_user.name.trim().chars().count() < self.config.min_name_length {
            return Err(DomainError::validation("name", "must be at least 2 characters"));
        }
        if !is_valid_email(new_user.email.trim()) {
            return Err(DomainError::validation("email", "is not a valid email address"));
        }
        if new_user.password.chars().count() < self.config.min_password_length {
            return Err(DomainError::validation(
                "password",
                "must be at least 8 characters",
            ));
        }
        Ok(())
    }
}

/// Minimal shape check: one '@' with a dotted, non-empty domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !email.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("grace@example.com"));
        assert!(is_valid_email("a.b+tag@sub.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user name@example.com"));
    }
}
