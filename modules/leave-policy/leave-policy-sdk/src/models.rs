//! Domain models for the leave policy evaluator.
//!
//! Mirrors the subject/action/resource/context split of an `AuthZEN`
//! evaluation, specialised for the employee leave store.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Field values of a stored document.
pub type Document = HashMap<String, serde_json::Value>;

/// Authorization evaluation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// Who is making the request.
    pub actor: Actor,
    /// The operation being performed.
    pub action: Action,
    /// The document or collection being accessed.
    pub resource: Resource,
    /// Stored state and write payload shape.
    pub context: Context,
}

/// The identity attempting an operation.
///
/// An actor without `uid`, or with an empty one, is anonymous. Capability
/// flags of an anonymous actor are never honoured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Authenticated user id, `None` for unauthenticated callers.
    pub uid: Option<String>,
    /// Email claim from the identity token. Informational only.
    #[serde(default)]
    pub email: Option<String>,
    /// `admin` claim.
    #[serde(default)]
    pub is_admin: bool,
    /// `manager` claim. Accepted but not consulted by any rule.
    #[serde(default)]
    pub is_manager: bool,
}

impl Actor {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user(uid: impl Into<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn admin(uid: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::user(uid)
        }
    }

    #[must_use]
    pub fn manager(uid: impl Into<String>) -> Self {
        Self {
            is_manager: true,
            ..Self::user(uid)
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Whether the actor carries a non-empty `uid`.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.uid.as_deref().is_some_and(|uid| !uid.is_empty())
    }

    /// Whether the admin capability applies. Requires an authenticated actor.
    #[must_use]
    pub fn is_effective_admin(&self) -> bool {
        self.is_authenticated() && self.is_admin
    }

    /// Whether this actor is the employee identified by `employee_id`.
    #[must_use]
    pub fn is_owner_of(&self, employee_id: &str) -> bool {
        self.is_authenticated() && self.uid.as_deref() == Some(employee_id)
    }
}

/// Operation kinds understood by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Fetch a single document.
    ReadOne,
    /// List a collection.
    ReadMany,
    /// Write a document that does not exist yet.
    Create,
    /// Modify or overwrite an existing document.
    Update,
}

impl Operation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadOne => "get",
            Self::ReadMany => "list",
            Self::Create => "create",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an action name does not denote a known [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation `{0}`")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Accepts the canonical names plus `set`, which the document store uses
    /// for both creating and overwriting; the evaluator tells the two apart
    /// by whether a stored document exists.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::ReadOne),
            "list" => Ok(Self::ReadMany),
            "create" | "set" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            other => Err(UnknownOperation(other.to_owned())),
        }
    }
}

/// The operation being performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Operation name (`get`, `list`, `create`, `update`).
    ///
    /// Kept as a string on the wire so that unknown names reach the
    /// evaluator and are denied there.
    pub name: String,
}

impl From<Operation> for Action {
    fn from(operation: Operation) -> Self {
        Self {
            name: operation.as_str().to_owned(),
        }
    }
}

/// The document or collection being accessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Slash separated path, e.g. `employee/user_abc/leaves/1`.
    pub path: String,
}

/// Additional evaluation context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    /// Current field values of the target document, `None` if it does not exist.
    #[serde(default)]
    pub existing: Option<Document>,
    /// Keys present in the write payload. Empty for reads.
    #[serde(default)]
    pub proposed_fields: BTreeSet<String>,
}

/// Identifies the policy rule that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Single employee read: admin or the employee.
    EmployeeRead,
    /// Employee collection listing: admin only.
    EmployeeList,
    /// Employee document creation: admin only.
    EmployeeCreate,
    /// Employee document update or overwrite: admin or the employee.
    EmployeeUpdate,
    /// Leave read, single or listing: admin or the owning employee.
    LeaveRead,
    /// Leave write by someone who is neither the owner nor an admin.
    LeaveWriteNotOwner,
    /// Leave write against a locked (approved) leave.
    LeaveLocked,
    /// Owner write limited to the remark field.
    LeaveOwnerFieldScope,
    /// Admin write limited to the status field.
    LeaveAdminFieldScope,
    /// Admin write to their own leave.
    SelfApproval,
    /// Unknown operation or unparseable path.
    MalformedRequest,
    /// Well-formed request that no rule covers.
    NoMatchingRule,
}

impl RuleId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmployeeRead => "employee_read",
            Self::EmployeeList => "employee_list",
            Self::EmployeeCreate => "employee_create",
            Self::EmployeeUpdate => "employee_update",
            Self::LeaveRead => "leave_read",
            Self::LeaveWriteNotOwner => "leave_write_not_owner",
            Self::LeaveLocked => "leave_locked",
            Self::LeaveOwnerFieldScope => "leave_owner_field_scope",
            Self::LeaveAdminFieldScope => "leave_admin_field_scope",
            Self::SelfApproval => "self_approval",
            Self::MalformedRequest => "malformed_request",
            Self::NoMatchingRule => "no_matching_rule",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authorization evaluation response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// Whether access is granted.
    pub decision: bool,
    /// The rule that decided.
    pub rule: RuleId,
}

impl EvaluationResponse {
    #[must_use]
    pub fn allow(rule: RuleId) -> Self {
        Self {
            decision: true,
            rule,
        }
    }

    #[must_use]
    pub fn deny(rule: RuleId) -> Self {
        Self {
            decision: false,
            rule,
        }
    }

    /// Allow when `granted` holds, deny otherwise, attributing either to `rule`.
    #[must_use]
    pub fn granted_if(granted: bool, rule: RuleId) -> Self {
        Self {
            decision: granted,
            rule,
        }
    }
}
