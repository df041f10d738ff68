//! Domain layer for the leave policy evaluator.

pub mod error;
pub mod local_client;
pub mod service;

pub use error::DomainError;
pub use local_client::LeavePolicyLocalClient;
pub use service::Service;
