//! Shared fixture for leave policy integration tests.
//!
//! Plays the role of the document store: the test seeds documents directly
//! (privileged, no policy), then issues reads and writes as a given actor
//! through the `PolicyEnforcer`, which supplies the stored state to the
//! evaluator exactly as the store would.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use leave_policy::{LeavePolicyConfig, LeavePolicyLocalClient};
use leave_policy_sdk::pep::{AccessRequest, EnforcerError, PolicyEnforcer};
use leave_policy_sdk::{Actor, Document, Operation, RuleId};
use serde_json::Value;

pub const MY_ID: &str = "user_abc";
pub const THEIR_ID: &str = "user_xyz";
pub const ADMIN_ID: &str = "user_admin";
pub const MANAGER_ID: &str = "user_manager";

pub fn my_auth() -> Actor {
    Actor::user(MY_ID).with_email("abc@gmail.com")
}

pub fn admin_auth() -> Actor {
    Actor::admin(ADMIN_ID).with_email("admin@gmail.com")
}

pub fn manager_auth() -> Actor {
    Actor::manager(MANAGER_ID).with_email("manager@gmail.com")
}

pub struct TestFixture {
    enforcer: PolicyEnforcer,
    documents: HashMap<String, Document>,
}

impl TestFixture {
    pub fn new() -> Self {
        Self::with_config(&LeavePolicyConfig::default())
    }

    pub fn with_config(cfg: &LeavePolicyConfig) -> Self {
        let client = LeavePolicyLocalClient::from_config(cfg)
            .unwrap_or_else(|e| panic!("policy should build: {e}"));
        Self {
            enforcer: PolicyEnforcer::new(Arc::new(client)),
            documents: HashMap::new(),
        }
    }

    /// Privileged write that bypasses the policy.
    pub fn seed(&mut self, path: &str, fields: &Value) {
        self.documents.insert(path.to_owned(), to_document(fields));
    }

    pub async fn get(&self, actor: &Actor, path: &str) -> Result<RuleId, EnforcerError> {
        let request = self.stored(path);
        self.enforcer
            .authorize(actor, Operation::ReadOne, path, &request)
            .await
    }

    pub async fn list(&self, actor: &Actor, path: &str) -> Result<RuleId, EnforcerError> {
        self.enforcer
            .authorize(actor, Operation::ReadMany, path, &AccessRequest::new())
            .await
    }

    /// Create-or-overwrite; applies the payload when allowed.
    pub async fn set(
        &mut self,
        actor: &Actor,
        path: &str,
        payload: &Value,
    ) -> Result<RuleId, EnforcerError> {
        let request = self.stored(path).payload(payload);
        let rule = self
            .enforcer
            .authorize(actor, Operation::Create, path, &request)
            .await?;
        self.documents.insert(path.to_owned(), to_document(payload));
        Ok(rule)
    }

    /// Merge update; applies the payload when allowed.
    pub async fn update(
        &mut self,
        actor: &Actor,
        path: &str,
        payload: &Value,
    ) -> Result<RuleId, EnforcerError> {
        let request = self.stored(path).payload(payload);
        let rule = self
            .enforcer
            .authorize(actor, Operation::Update, path, &request)
            .await?;
        self.documents
            .entry(path.to_owned())
            .or_default()
            .extend(to_document(payload));
        Ok(rule)
    }

    pub fn field(&self, path: &str, name: &str) -> Option<&Value> {
        self.documents.get(path).and_then(|doc| doc.get(name))
    }

    fn stored(&self, path: &str) -> AccessRequest {
        match self.documents.get(path) {
            Some(doc) => AccessRequest::new().existing_document(doc.clone()),
            None => AccessRequest::new(),
        }
    }
}

fn to_document(fields: &Value) -> Document {
    fields
        .as_object()
        .map(|object| object.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
        .unwrap_or_default()
}

pub fn leaves_of(employee_id: &str) -> String {
    format!("employee/{employee_id}/leaves")
}

pub fn leave(employee_id: &str, leave_id: &str) -> String {
    format!("employee/{employee_id}/leaves/{leave_id}")
}
