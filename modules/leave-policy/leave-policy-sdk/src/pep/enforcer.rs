//! Policy Enforcement Point (`PEP`) object.
//!
//! [`PolicyEnforcer`] encapsulates the full PEP flow:
//! build evaluation request → call the evaluator → turn DENY into an error.
//!
//! Constructed once during service initialisation with the policy client and
//! shared by every document operation of the service.

use std::sync::Arc;

use crate::api::LeavePolicyClient;
use crate::error::LeavePolicyError;
use crate::models::{Actor, EvaluationResponse, Operation, RuleId};
use crate::pep::request_builder::{AccessRequest, build_evaluation_request};

/// Error from the PEP enforcement flow.
#[derive(Debug, thiserror::Error)]
pub enum EnforcerError {
    /// The evaluator call itself failed.
    #[error("leave policy evaluation failed: {0}")]
    EvaluationFailed(#[from] LeavePolicyError),

    /// The evaluator returned DENY.
    #[error("{operation} on `{path}` denied by rule `{rule}`")]
    Denied {
        operation: Operation,
        path: String,
        rule: RuleId,
    },
}

impl EnforcerError {
    /// The denying rule, if this is a denial.
    #[must_use]
    pub fn rule(&self) -> Option<RuleId> {
        match self {
            Self::Denied { rule, .. }
            | Self::EvaluationFailed(LeavePolicyError::Denied { rule }) => Some(*rule),
            Self::EvaluationFailed(_) => None,
        }
    }
}

/// Policy Enforcement Point.
///
/// Cloneable and cheap to pass around (`Arc` inside).
///
/// # Example
///
/// ```ignore
/// let enforcer = PolicyEnforcer::new(policy.clone());
///
/// enforcer
///     .authorize(&actor, Operation::ReadOne, "employee/user_abc", &AccessRequest::new())
///     .await?;
/// ```
#[derive(Clone)]
pub struct PolicyEnforcer {
    policy: Arc<dyn LeavePolicyClient>,
}

impl PolicyEnforcer {
    /// Create a new enforcer.
    #[must_use]
    pub fn new(policy: Arc<dyn LeavePolicyClient>) -> Self {
        Self { policy }
    }

    /// Build a request and return the evaluator's raw response.
    ///
    /// # Errors
    ///
    /// - [`EnforcerError::EvaluationFailed`] if the evaluator call fails
    pub async fn evaluate(
        &self,
        actor: &Actor,
        operation: Operation,
        path: &str,
        request: &AccessRequest,
    ) -> Result<EvaluationResponse, EnforcerError> {
        let eval_request = build_evaluation_request(actor, operation, path, request);
        Ok(self.policy.evaluate(eval_request).await?)
    }

    /// Execute the full PEP flow: build request → evaluate → require ALLOW.
    ///
    /// Returns the rule that granted access.
    ///
    /// # Errors
    ///
    /// - [`EnforcerError::EvaluationFailed`] if the evaluator call fails
    /// - [`EnforcerError::Denied`] if the evaluator returned DENY
    pub async fn authorize(
        &self,
        actor: &Actor,
        operation: Operation,
        path: &str,
        request: &AccessRequest,
    ) -> Result<RuleId, EnforcerError> {
        let response = self.evaluate(actor, operation, path, request).await?;
        if response.decision {
            Ok(response.rule)
        } else {
            Err(EnforcerError::Denied {
                operation,
                path: path.to_owned(),
                rule: response.rule,
            })
        }
    }

    /// Like [`Self::authorize`] but collapses the outcome to a bool.
    ///
    /// Evaluation failures count as DENY.
    pub async fn is_allowed(
        &self,
        actor: &Actor,
        operation: Operation,
        path: &str,
        request: &AccessRequest,
    ) -> bool {
        self.authorize(actor, operation, path, request)
            .await
            .is_ok()
    }
}

impl std::fmt::Debug for PolicyEnforcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyEnforcer").finish_non_exhaustive()
    }
}
