//! Leave Policy SDK
//!
//! This crate provides the public API for the `leave_policy` module:
//!
//! - [`LeavePolicyClient`] - Public API trait for consumers
//! - [`EvaluationRequest`], [`EvaluationResponse`] - Evaluation models
//! - [`ResourcePath`], [`PathLayout`] - Document path grammar
//! - [`RuleId`] - Which rule of the policy produced a decision
//! - [`LeavePolicyError`] - Error types
//! - [`pep`] - PEP helpers (request builder, enforcer)
//!
//! ## Usage
//!
//! ```ignore
//! use leave_policy_sdk::{Actor, Operation, pep::{AccessRequest, PolicyEnforcer}};
//!
//! let enforcer = PolicyEnforcer::new(client);
//!
//! // Employee edits the remark of their own pending leave
//! let request = AccessRequest::new()
//!     .existing_document(stored)
//!     .payload(&json!({ "remark": "Back on Monday" }));
//!
//! enforcer
//!     .authorize(&Actor::user("user_abc"), Operation::Update, "employee/user_abc/leaves/1", &request)
//!     .await?;
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;
pub mod path;
pub mod pep;

// Re-export main types at crate root
pub use api::LeavePolicyClient;
pub use error::LeavePolicyError;
pub use models::{
    Action, Actor, Context, Document, EvaluationRequest, EvaluationResponse, Operation, Resource,
    RuleId, UnknownOperation,
};
pub use path::{PathError, PathLayout, ResourcePath};
