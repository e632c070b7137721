//! Finquiz Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic of the financial profile quiz:
//! the question catalog, the scenario-scoring engine, and the session
//! service that ties scoring to persistence. It is database-agnostic and
//! defines traits that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod quiz;
pub mod responses;
pub mod scenarios;
pub mod sessions;

pub use responses::{QuestionResponses, ResponseValue};
pub use scenarios::{compute_scenarios, InvestmentProfile, ScenarioResult};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
