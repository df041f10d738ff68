//! Leave Policy Module
//!
//! Evaluates access to the `GoLeave` document store: employee records under
//! `employee/{id}` and leave requests under `employee/{id}/leaves/{leave}`.
//!
//! The evaluator is a pure, synchronous decision table
//! ([`domain::Service`]); [`domain::LeavePolicyLocalClient`] exposes it
//! through the SDK's `LeavePolicyClient` trait for in-process callers.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::LeavePolicyConfig;
pub use domain::{DomainError, LeavePolicyLocalClient, Service};
