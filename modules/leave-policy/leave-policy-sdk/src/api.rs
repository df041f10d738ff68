//! Public API trait for the leave policy evaluator.

use async_trait::async_trait;

use crate::error::LeavePolicyError;
use crate::models::{EvaluationRequest, EvaluationResponse};

/// Public API trait for the leave policy evaluator.
///
/// The owning document service calls this on every document access and
/// enforces the verdict:
///
/// ```ignore
/// let response = policy.evaluate(request).await?;
/// if !response.decision {
///     return Err(StoreError::PermissionDenied);
/// }
/// ```
#[async_trait]
pub trait LeavePolicyClient: Send + Sync {
    /// Evaluate an authorization request.
    ///
    /// Returns the decision together with the rule that produced it.
    ///
    /// # Errors
    ///
    /// - `Internal` for unexpected errors
    async fn evaluate(
        &self,
        request: EvaluationRequest,
    ) -> Result<EvaluationResponse, LeavePolicyError>;
}
