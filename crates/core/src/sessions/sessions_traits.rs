use crate::errors::Result;
use crate::quiz::Question;
use crate::responses::QuestionResponses;
use crate::scenarios::ScenarioResult;
use crate::sessions::sessions_model::{NewQuizResult, QuizResult, QuizSession, QuizSubmission};
use async_trait::async_trait;

/// Trait for quiz session repository operations
#[async_trait]
pub trait QuizRepositoryTrait: Send + Sync {
    async fn save_responses(
        &self,
        session_id: String,
        responses: QuestionResponses,
    ) -> Result<QuizSession>;
    async fn save_result(&self, new_result: NewQuizResult) -> Result<QuizResult>;
    fn get_session(&self, session_id: &str) -> Result<Option<QuizSession>>;
    fn get_result(&self, session_id: &str) -> Result<Option<QuizResult>>;
    /// Removes the session and its result; returns the number of sessions removed.
    async fn delete_session(&self, session_id: String) -> Result<usize>;
}

/// Trait for quiz service operations
#[async_trait]
pub trait QuizServiceTrait: Send + Sync {
    fn get_questions(&self) -> Vec<Question>;
    fn preview(&self, responses: &QuestionResponses) -> Result<ScenarioResult>;
    async fn submit(&self, responses: QuestionResponses) -> Result<QuizSubmission>;
    fn get_session(&self, session_id: &str) -> Result<QuizSession>;
    fn get_result(&self, session_id: &str) -> Result<QuizResult>;
    async fn delete_session(&self, session_id: String) -> Result<usize>;
}
