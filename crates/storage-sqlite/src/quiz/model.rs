//! Database models for quiz sessions and results.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use finquiz_core::errors::{Error, Result};
use finquiz_core::sessions::{NewQuizResult, QuizResult, QuizSession};
use finquiz_core::QuestionResponses;

use crate::errors::StorageError;

/// Database model for stored quiz answers
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::quiz_responses)]
#[diesel(primary_key(session_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct QuizResponsesDB {
    pub session_id: String,
    /// JSON object of question id → answer
    pub responses: String,
    pub created_at: NaiveDateTime,
}

/// Database model for stored results
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(QuizResponsesDB, foreign_key = session_id))]
#[diesel(table_name = crate::schema::quiz_results)]
#[diesel(primary_key(session_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct QuizResultDB {
    pub session_id: String,
    pub conservative_outcome: i64,
    pub moderate_outcome: i64,
    pub aggressive_outcome: i64,
    pub recommended_profile: String,
    pub success_score: i32,
    pub created_at: NaiveDateTime,
}

fn outcome_to_db(value: u64) -> std::result::Result<i64, StorageError> {
    i64::try_from(value).map_err(|_| {
        StorageError::SerializationError(format!("Outcome {} does not fit a BIGINT column", value))
    })
}

fn outcome_from_db(value: i64) -> std::result::Result<u64, StorageError> {
    u64::try_from(value).map_err(|_| {
        StorageError::SerializationError(format!("Stored outcome {} is negative", value))
    })
}

impl QuizResponsesDB {
    pub fn from_domain(
        session_id: String,
        responses: &QuestionResponses,
        created_at: NaiveDateTime,
    ) -> Result<Self> {
        Ok(Self {
            session_id,
            responses: serde_json::to_string(responses).map_err(StorageError::from)?,
            created_at,
        })
    }
}

impl TryFrom<QuizResponsesDB> for QuizSession {
    type Error = Error;

    fn try_from(db: QuizResponsesDB) -> Result<Self> {
        Ok(Self {
            responses: serde_json::from_str(&db.responses).map_err(StorageError::from)?,
            session_id: db.session_id,
            created_at: db.created_at,
        })
    }
}

impl QuizResultDB {
    pub fn from_domain(new_result: NewQuizResult, created_at: NaiveDateTime) -> Result<Self> {
        Ok(Self {
            session_id: new_result.session_id,
            conservative_outcome: outcome_to_db(new_result.conservative_outcome)?,
            moderate_outcome: outcome_to_db(new_result.moderate_outcome)?,
            aggressive_outcome: outcome_to_db(new_result.aggressive_outcome)?,
            recommended_profile: new_result.recommended_profile.as_str().to_string(),
            success_score: i32::from(new_result.success_score),
            created_at,
        })
    }
}

impl TryFrom<QuizResultDB> for QuizResult {
    type Error = Error;

    fn try_from(db: QuizResultDB) -> Result<Self> {
        let success_score = u8::try_from(db.success_score).map_err(|_| {
            StorageError::SerializationError(format!(
                "Stored success score {} is out of range",
                db.success_score
            ))
        })?;

        Ok(Self {
            conservative_outcome: outcome_from_db(db.conservative_outcome)?,
            moderate_outcome: outcome_from_db(db.moderate_outcome)?,
            aggressive_outcome: outcome_from_db(db.aggressive_outcome)?,
            recommended_profile: db
                .recommended_profile
                .parse()
                .map_err(|e: Error| StorageError::SerializationError(e.to_string()))?,
            success_score,
            session_id: db.session_id,
            created_at: db.created_at,
        })
    }
}
