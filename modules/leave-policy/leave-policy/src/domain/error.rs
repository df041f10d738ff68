//! Domain errors for the leave policy evaluator.

use leave_policy_sdk::LeavePolicyError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<DomainError> for LeavePolicyError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidConfig(msg) => Self::InvalidConfig(msg),
        }
    }
}
