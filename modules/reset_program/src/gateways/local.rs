use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{client::ResetProgramApi, error::ResetProgramError, model::ResetPlan};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the ResetProgramApi trait that delegates to the
/// domain service.
pub struct ResetProgramLocalClient {
    service: Arc<Service>,
}

impl ResetProgramLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ResetProgramApi for ResetProgramLocalClient {
    async fn ensure_plan(&self, user_id: Uuid) -> anyhow::Result<ResetPlan> {
        self.service
            .ensure_plan(user_id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn get_plan(&self, user_id: Uuid) -> anyhow::Result<Option<ResetPlan>> {
        self.service
            .get_plan(user_id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow.
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::PlanNotFound { user_id } => ResetProgramError::no_plan(user_id),
        DomainError::UnknownTask { task_id } => {
            ResetProgramError::validation(format!("unknown task '{task_id}'"))
        }
        DomainError::Validation { field, message } => {
            ResetProgramError::validation(format!("{field}: {message}"))
        }
        DomainError::Database { .. } => ResetProgramError::internal(),
    };

    anyhow::Error::new(contract_error)
}
