//! Quiz session domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::responses::QuestionResponses;
use crate::scenarios::{InvestmentProfile, ScenarioResult};

/// Answers recorded for one session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizSession {
    pub session_id: String,
    pub responses: QuestionResponses,
    pub created_at: NaiveDateTime,
}

/// Stored scoring outcome for one session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub session_id: String,
    pub conservative_outcome: u64,
    pub moderate_outcome: u64,
    pub aggressive_outcome: u64,
    pub recommended_profile: InvestmentProfile,
    pub success_score: u8,
    pub created_at: NaiveDateTime,
}

impl QuizResult {
    pub fn scenario(&self) -> ScenarioResult {
        ScenarioResult {
            conservative: self.conservative_outcome,
            moderate: self.moderate_outcome,
            aggressive: self.aggressive_outcome,
            profile: self.recommended_profile,
            success_score: self.success_score,
        }
    }
}

/// Input model for storing a result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewQuizResult {
    pub session_id: String,
    pub conservative_outcome: u64,
    pub moderate_outcome: u64,
    pub aggressive_outcome: u64,
    pub recommended_profile: InvestmentProfile,
    pub success_score: u8,
}

impl NewQuizResult {
    pub fn from_scenario(session_id: impl Into<String>, scenario: &ScenarioResult) -> Self {
        Self {
            session_id: session_id.into(),
            conservative_outcome: scenario.conservative,
            moderate_outcome: scenario.moderate,
            aggressive_outcome: scenario.aggressive,
            recommended_profile: scenario.profile,
            success_score: scenario.success_score,
        }
    }
}

/// Returned to the form flow once a quiz is stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub session_id: String,
    pub result: ScenarioResult,
}
