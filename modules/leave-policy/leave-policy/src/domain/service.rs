//! Service implementation for the leave policy evaluator.

use std::collections::BTreeSet;

use leave_policy_sdk::{
    Actor, Context, Document, EvaluationRequest, EvaluationResponse, Operation, PathError,
    PathLayout, ResourcePath, RuleId, UnknownOperation,
};

use super::DomainError;
use crate::config::LeavePolicyConfig;

const ANONYMOUS: &str = "<anonymous>";

/// Why a request could not be interpreted. Always results in DENY.
#[derive(Debug, thiserror::Error)]
enum Malformed {
    #[error(transparent)]
    Operation(#[from] UnknownOperation),
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Leave policy evaluator.
///
/// Rules, first match wins:
///
/// | path | operation | rule |
/// |------|-----------|------|
/// | `employee/{id}` | get | admin or owner |
/// | `employee` | list | admin |
/// | `employee/{id}` | write, no stored doc | admin |
/// | `employee/{id}` | write, stored doc | admin or owner |
/// | `employee/{id}/leaves[/{leave}]` | get / list | admin or owner |
/// | `employee/{id}/leaves/{leave}` | write | owner: remark only; admin: status only, never own; locked statuses frozen |
///
/// Anything else is denied. The service holds only immutable configuration
/// and is safe to share across threads.
#[derive(Debug, Clone)]
pub struct Service {
    layout: PathLayout,
    status_field: String,
    remark_field: String,
    locked_statuses: Vec<String>,
}

impl Default for Service {
    fn default() -> Self {
        let cfg = LeavePolicyConfig::default();
        Self::from_valid_config(&cfg)
    }
}

impl Service {
    /// Evaluator with the default `GoLeave` layout and fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an evaluator from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfig`] if `cfg` does not validate.
    pub fn from_config(cfg: &LeavePolicyConfig) -> Result<Self, DomainError> {
        cfg.validate()?;
        Ok(Self::from_valid_config(cfg))
    }

    fn from_valid_config(cfg: &LeavePolicyConfig) -> Self {
        Self {
            layout: cfg.path_layout(),
            status_field: cfg.status_field.clone(),
            remark_field: cfg.remark_field.clone(),
            locked_statuses: cfg.locked_statuses.clone(),
        }
    }

    /// Evaluate an authorization request.
    ///
    /// Unknown operations and unparseable paths are denied with
    /// [`RuleId::MalformedRequest`].
    #[must_use]
    pub fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResponse {
        let response = match self.interpret(request) {
            Ok((operation, path)) => {
                self.decide(&request.actor, operation, &path, &request.context)
            }
            Err(reason) => {
                tracing::warn!(
                    action = %request.action.name,
                    path = %request.resource.path,
                    reason = %reason,
                    "malformed leave policy request, denying"
                );
                EvaluationResponse::deny(RuleId::MalformedRequest)
            }
        };

        tracing::debug!(
            uid = request.actor.uid.as_deref().unwrap_or(ANONYMOUS),
            action = %request.action.name,
            path = %request.resource.path,
            rule = %response.rule,
            allowed = response.decision,
            "leave policy decision"
        );

        response
    }

    fn interpret(
        &self,
        request: &EvaluationRequest,
    ) -> Result<(Operation, ResourcePath), Malformed> {
        let operation = request.action.name.parse::<Operation>()?;
        let path = self.layout.parse(&request.resource.path)?;
        Ok((operation, path))
    }

    fn decide(
        &self,
        actor: &Actor,
        operation: Operation,
        path: &ResourcePath,
        context: &Context,
    ) -> EvaluationResponse {
        let is_admin = actor.is_effective_admin();

        match (path, operation) {
            (ResourcePath::Employee { employee_id }, Operation::ReadOne) => {
                EvaluationResponse::granted_if(
                    is_admin || actor.is_owner_of(employee_id),
                    RuleId::EmployeeRead,
                )
            }
            (ResourcePath::EmployeeCollection, Operation::ReadMany) => {
                EvaluationResponse::granted_if(is_admin, RuleId::EmployeeList)
            }
            // Create vs overwrite is decided by the stored document, not the label.
            (ResourcePath::Employee { employee_id }, Operation::Create | Operation::Update) => {
                if context.existing.is_some() {
                    EvaluationResponse::granted_if(
                        is_admin || actor.is_owner_of(employee_id),
                        RuleId::EmployeeUpdate,
                    )
                } else {
                    EvaluationResponse::granted_if(is_admin, RuleId::EmployeeCreate)
                }
            }
            (ResourcePath::Leave { employee_id, .. }, Operation::ReadOne)
            | (ResourcePath::LeaveCollection { employee_id }, Operation::ReadMany) => {
                EvaluationResponse::granted_if(
                    is_admin || actor.is_owner_of(employee_id),
                    RuleId::LeaveRead,
                )
            }
            (ResourcePath::Leave { employee_id, .. }, Operation::Create | Operation::Update) => {
                self.decide_leave_write(actor, employee_id, context)
            }
            _ => EvaluationResponse::deny(RuleId::NoMatchingRule),
        }
    }

    /// Leave writes:
    ///
    /// 1. neither owner nor admin → deny
    /// 2. stored status is locked → deny, admins included
    /// 3. admin writing their own leave → deny (no self-approval)
    /// 4. admin → allow iff the payload touches exactly the status field
    /// 5. owner → allow iff the payload touches exactly the remark field
    fn decide_leave_write(
        &self,
        actor: &Actor,
        employee_id: &str,
        context: &Context,
    ) -> EvaluationResponse {
        let is_admin = actor.is_effective_admin();
        let is_owner = actor.is_owner_of(employee_id);

        if !is_admin && !is_owner {
            return EvaluationResponse::deny(RuleId::LeaveWriteNotOwner);
        }

        if self.is_locked(context.existing.as_ref()) {
            return EvaluationResponse::deny(RuleId::LeaveLocked);
        }

        if is_admin {
            if is_owner {
                return EvaluationResponse::deny(RuleId::SelfApproval);
            }
            return EvaluationResponse::granted_if(
                touches_only(&context.proposed_fields, &self.status_field),
                RuleId::LeaveAdminFieldScope,
            );
        }

        EvaluationResponse::granted_if(
            touches_only(&context.proposed_fields, &self.remark_field),
            RuleId::LeaveOwnerFieldScope,
        )
    }

    fn is_locked(&self, existing: Option<&Document>) -> bool {
        existing
            .and_then(|doc| doc.get(&self.status_field))
            .and_then(serde_json::Value::as_str)
            .is_some_and(|status| self.locked_statuses.iter().any(|locked| locked == status))
    }
}

fn touches_only(fields: &BTreeSet<String>, field: &str) -> bool {
    fields.len() == 1 && fields.contains(field)
}
