//! PEP (Policy Enforcement Point) helpers.
//!
//! Convenience functions for the document service acting as a PEP:
//! - [`request_builder::build_evaluation_request`] — Builds an `EvaluationRequest` from an actor, a path and an [`AccessRequest`]
//! - [`enforcer::PolicyEnforcer`] — Evaluates and turns DENY into an error

pub mod enforcer;
pub mod request_builder;

pub use enforcer::{EnforcerError, PolicyEnforcer};
pub use request_builder::{AccessRequest, build_evaluation_request};
