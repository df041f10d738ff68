//! Local (in-process) client for the leave policy evaluator.

use std::sync::Arc;

use async_trait::async_trait;
use leave_policy_sdk::{
    EvaluationRequest, EvaluationResponse, LeavePolicyClient, LeavePolicyError,
};

use super::{DomainError, Service};
use crate::config::LeavePolicyConfig;

/// Local client wrapping the evaluator service.
pub struct LeavePolicyLocalClient {
    svc: Arc<Service>,
}

impl LeavePolicyLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }

    /// Build the service from configuration and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`LeavePolicyError::InvalidConfig`] if the configuration does
    /// not validate.
    pub fn from_config(cfg: &LeavePolicyConfig) -> Result<Self, LeavePolicyError> {
        let svc = Service::from_config(cfg).map_err(|e| log_and_convert("from_config", e))?;
        Ok(Self::new(Arc::new(svc)))
    }
}

fn log_and_convert(op: &str, e: DomainError) -> LeavePolicyError {
    tracing::error!(operation = op, error = %e, "leave_policy call failed");
    e.into()
}

#[async_trait]
impl LeavePolicyClient for LeavePolicyLocalClient {
    async fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationResponse, LeavePolicyError> {
        Ok(self.svc.evaluate(&request))
    }
}
