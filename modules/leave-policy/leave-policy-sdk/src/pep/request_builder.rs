//! Builds [`EvaluationRequest`]s from the caller's view of an access.

use std::collections::BTreeSet;

use crate::models::{Action, Actor, Context, Document, EvaluationRequest, Operation, Resource};

/// Per-access document state for [`build_evaluation_request`].
///
/// Reads normally need nothing. Writes carry the stored document (if any)
/// and the payload whose keys form the proposed field set.
///
/// ```ignore
/// let request = AccessRequest::new()
///     .existing_document(stored)
///     .payload(&json!({ "status": "Approved" }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AccessRequest {
    existing: Option<Document>,
    proposed_fields: BTreeSet<String>,
}

impl AccessRequest {
    /// Create a new empty access request: no stored document, no payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stored state of the target document.
    #[must_use]
    pub fn existing_document(mut self, document: Document) -> Self {
        self.existing = Some(document);
        self
    }

    /// Add the top-level keys of a JSON write payload to the proposed fields.
    ///
    /// A payload that is not a JSON object contributes no fields.
    #[must_use]
    pub fn payload(mut self, payload: &serde_json::Value) -> Self {
        if let Some(object) = payload.as_object() {
            self.proposed_fields.extend(object.keys().cloned());
        }
        self
    }

    /// Add a single proposed field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.proposed_fields.insert(name.into());
        self
    }

    #[must_use]
    pub fn proposed_fields(&self) -> &BTreeSet<String> {
        &self.proposed_fields
    }
}

/// Build an evaluation request for `actor` performing `operation` on `path`.
#[must_use]
pub fn build_evaluation_request(
    actor: &Actor,
    operation: Operation,
    path: &str,
    request: &AccessRequest,
) -> EvaluationRequest {
    EvaluationRequest {
        actor: actor.clone(),
        action: Action::from(operation),
        resource: Resource {
            path: path.to_owned(),
        },
        context: Context {
            existing: request.existing.clone(),
            proposed_fields: request.proposed_fields.clone(),
        },
    }
}
