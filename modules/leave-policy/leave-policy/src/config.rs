//! Configuration for the leave policy evaluator.

use leave_policy_sdk::PathLayout;
use leave_policy_sdk::path::{DEFAULT_EMPLOYEE_COLLECTION, DEFAULT_LEAVES_COLLECTION};
use serde::Deserialize;

use crate::domain::DomainError;

/// Evaluator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LeavePolicyConfig {
    /// Top-level collection holding employee records.
    pub employee_collection: String,

    /// Sub-collection of an employee holding leave requests.
    pub leaves_collection: String,

    /// Leave field only admins may write.
    pub status_field: String,

    /// Leave field only the owning employee may write.
    pub remark_field: String,

    /// Status values that make a leave immutable.
    pub locked_statuses: Vec<String>,
}

impl Default for LeavePolicyConfig {
    fn default() -> Self {
        Self {
            employee_collection: DEFAULT_EMPLOYEE_COLLECTION.to_owned(),
            leaves_collection: DEFAULT_LEAVES_COLLECTION.to_owned(),
            status_field: "status".to_owned(),
            remark_field: "remark".to_owned(),
            locked_statuses: vec!["Approved".to_owned()],
        }
    }
}

impl LeavePolicyConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfig`] if the YAML does not parse or
    /// contains unknown keys.
    pub fn from_yaml(yaml: &str) -> Result<Self, DomainError> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| DomainError::InvalidConfig(format!("failed to parse config: {e}")))
    }

    /// Check the values make a usable policy.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfig`] naming the first offending key.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (key, value) in [
            ("employee_collection", &self.employee_collection),
            ("leaves_collection", &self.leaves_collection),
            ("status_field", &self.status_field),
            ("remark_field", &self.remark_field),
        ] {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidConfig(format!(
                    "`{key}` must not be empty"
                )));
            }
            if value.contains('/') {
                return Err(DomainError::InvalidConfig(format!(
                    "`{key}` must not contain `/`: {value}"
                )));
            }
        }

        if self.status_field == self.remark_field {
            return Err(DomainError::InvalidConfig(
                "`status_field` and `remark_field` must differ".to_owned(),
            ));
        }

        if self.locked_statuses.is_empty() {
            return Err(DomainError::InvalidConfig(
                "`locked_statuses` must list at least one status".to_owned(),
            ));
        }

        Ok(())
    }

    #[must_use]
    pub fn path_layout(&self) -> PathLayout {
        PathLayout {
            employee_collection: self.employee_collection.clone(),
            leaves_collection: self.leaves_collection.clone(),
        }
    }
}
