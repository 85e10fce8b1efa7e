use crate::contract::model::{PlanTier, User};
use crate::infra::storage::entity::Model as UserEntity;

/// Convert a database entity to the safe contract model. The credential
/// hash stays behind in the row.
pub fn entity_to_contract(entity: UserEntity) -> User {
    User {
        id: entity.id,
        email: entity.email,
        name: entity.name,
        country: entity.country,
        currency: entity.currency,
        timezone: entity.timezone,
        plan: PlanTier::from_str_or_default(&entity.plan),
        // Unknown stored values fall back to the default focus instead of
        // failing the whole read.
        reset_goal: entity.reset_goal.parse().unwrap_or_default(),
        onboarding_complete: entity.onboarding_complete,
        created_at: entity.created_at,
        updated_at: entity.updated_at,
    }
}
