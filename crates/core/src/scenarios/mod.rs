//! Scenarios module - scoring of quiz answers into growth projections.
//!
//! The engine is a pure function over a [`QuestionResponses`](crate::QuestionResponses)
//! map. It derives three weighted sub-scores (behavioral, background and
//! financial health), blends them into a success score, shifts three base
//! growth rates by that score, and projects a principal plus monthly
//! contribution forward under each rate.
//!
//! ```text
//! responses ─► SubScores ─► GrowthRates ─┐
//!     │                                  ├─► ScenarioResult
//!     └──────► ProjectionInputs ─────────┘
//! ```
//!
//! All weights, rates and bucket tables are fixed constants.

mod scenarios_engine;
mod scenarios_model;

pub use scenarios_engine::{analyze, compute_scenarios, future_value, select_profile, weighted_sum};
pub use scenarios_model::{
    GrowthRates, InvestmentProfile, ProjectionInputs, ScenarioBreakdown, ScenarioResult, SubScores,
};
