use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::contract::model::{OnboardingProfile, ProfilePatch, User};
use crate::domain::repo::{StoredUser, UsersRepository};
use crate::infra::storage::entity::{ActiveModel as UserAM, Column, Entity as UserEntity};
use crate::infra::storage::mapper::entity_to_contract;

pub struct SeaOrmUsersRepository {
    db: DatabaseConnection,
}

impl SeaOrmUsersRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for SeaOrmUsersRepository {
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let found = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(entity_to_contract))
    }

    async fn find_stored_by_email(&self, email: &str) -> anyhow::Result<Option<StoredUser>> {
        let found = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find by email failed")?;
        Ok(found.map(|row| StoredUser {
            password_hash: row.password_hash.clone(),
            user: entity_to_contract(row),
        }))
    }

    async fn email_exists(&self, email: &str) -> anyhow::Result<bool> {
        let count = UserEntity::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await
            .context("email_exists failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, user: User, password_hash: String) -> anyhow::Result<()> {
        let m = UserAM {
            id: Set(user.id),
            email: Set(user.email),
            password_hash: Set(password_hash),
            name: Set(user.name),
            country: Set(user.country),
            currency: Set(user.currency),
            timezone: Set(user.timezone),
            plan: Set(user.plan.as_str().to_string()),
            reset_goal: Set(user.reset_goal.as_str().to_string()),
            onboarding_complete: Set(user.onboarding_complete),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        };
        let _ = m.insert(&self.db).await.context("insert failed")?;
        Ok(())
    }

    async fn apply_profile_patch(
        &self,
        id: Uuid,
        patch: ProfilePatch,
    ) -> anyhow::Result<Option<User>> {
        let Some(row) = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find for patch failed")?
        else {
            return Ok(None);
        };

        let mut am = row.into_active_model();
        if let Some(name) = patch.name {
            am.name = Set(name.trim().to_string());
        }
        if let Some(country) = patch.country {
            am.country = Set(country);
        }
        if let Some(currency) = patch.currency {
            am.currency = Set(currency);
        }
        if let Some(timezone) = patch.timezone {
            am.timezone = Set(timezone);
        }
        am.updated_at = Set(Utc::now());

        let updated = am.update(&self.db).await.context("profile patch failed")?;
        Ok(Some(entity_to_contract(updated)))
    }

    async fn apply_onboarding(
        &self,
        id: Uuid,
        profile: OnboardingProfile,
    ) -> anyhow::Result<Option<User>> {
        let Some(row) = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find for onboarding failed")?
        else {
            return Ok(None);
        };

        let mut am = row.into_active_model();
        am.country = Set(profile.country);
        am.currency = Set(profile.currency);
        am.timezone = Set(profile.timezone);
        am.reset_goal = Set(profile.reset_goal.as_str().to_string());
        am.onboarding_complete = Set(true);
        am.updated_at = Set(Utc::now());

        let updated = am.update(&self.db).await.context("onboarding failed")?;
        Ok(Some(entity_to_contract(updated)))
    }

    async fn find_password_hash(&self, id: Uuid) -> anyhow::Result<Option<String>> {
        let found = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find hash failed")?;
        Ok(found.map(|row| row.password_hash))
    }

    async fn set_password_hash(&self, id: Uuid, hash: String) -> anyhow::Result<()> {
        let mut am = UserAM {
            id: Set(id),
            ..Default::default()
        };
        am.password_hash = Set(hash);
        am.updated_at = Set(Utc::now());
        let _ = am.update(&self.db).await.context("set hash failed")?;
        Ok(())
    }
}
