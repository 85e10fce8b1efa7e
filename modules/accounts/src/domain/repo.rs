use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::model::{OnboardingProfile, ProfilePatch, User};

/// A stored user plus its credential hash. Only the domain service ever
/// sees the hash.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub user: User,
    pub password_hash: String,
}

/// Port for the domain layer: persistence operations account management needs.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    /// Lookup by (already lowercased) email, hash included, for login.
    async fn find_stored_by_email(&self, email: &str) -> anyhow::Result<Option<StoredUser>>;

    /// Check uniqueness by (already lowercased) email.
    async fn email_exists(&self, email: &str) -> anyhow::Result<bool>;

    /// Insert a fully-formed user; service computes id/defaults/hash.
    async fn insert(&self, user: User, password_hash: String) -> anyhow::Result<()>;

    /// Apply a profile patch; returns the updated user, None if absent.
    async fn apply_profile_patch(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> anyhow::Result<Option<User>>;

    /// Apply the onboarding payload and set the completion flag.
    async fn apply_onboarding(
        &self,
        id: Uuid,
        profile: OnboardingProfile,
    ) -> anyhow::Result<Option<User>>;

    /// Current hash for a password change, None if the user is absent.
    async fn find_password_hash(&self, id: Uuid) -> anyhow::Result<Option<String>>;

    async fn set_password_hash(&self, id: Uuid, hash: String) -> anyhow::Result<()>;
}
