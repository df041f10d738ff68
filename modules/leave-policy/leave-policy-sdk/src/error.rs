//! Error types for the leave policy module.

use crate::models::RuleId;

/// Errors returned by [`LeavePolicyClient`](crate::LeavePolicyClient)
/// implementations.
///
/// A DENY decision is a normal [`EvaluationResponse`](crate::EvaluationResponse),
/// not an error. [`LeavePolicyError::Denied`] exists for callers that turn a
/// decision into control flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeavePolicyError {
    /// Access was denied by the named rule.
    #[error("access denied by rule `{rule}`")]
    Denied { rule: RuleId },

    /// The evaluator could not be built from its configuration.
    #[error("invalid leave policy configuration: {0}")]
    InvalidConfig(String),

    /// Unexpected failure.
    #[error("internal error: {0}")]
    Internal(String),
}
