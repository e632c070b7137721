use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info};
use uuid::Uuid;

use super::sessions_model::{NewQuizResult, QuizResult, QuizSession, QuizSubmission};
use super::sessions_traits::{QuizRepositoryTrait, QuizServiceTrait};
use crate::constants::SESSION_ID_PREFIX;
use crate::errors::{DatabaseError, Result};
use crate::quiz::{Question, QuestionCatalog};
use crate::responses::QuestionResponses;
use crate::scenarios::{compute_scenarios, ScenarioResult};

/// Validates answers, scores them and hands both to the repository.
pub struct QuizService {
    repository: Arc<dyn QuizRepositoryTrait>,
    catalog: QuestionCatalog,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepositoryTrait>) -> Self {
        Self::with_catalog(repository, QuestionCatalog::standard())
    }

    pub fn with_catalog(repository: Arc<dyn QuizRepositoryTrait>, catalog: QuestionCatalog) -> Self {
        QuizService {
            repository,
            catalog,
        }
    }

    fn new_session_id() -> String {
        format!("{}{}", SESSION_ID_PREFIX, Uuid::new_v4().simple())
    }
}

#[async_trait]
impl QuizServiceTrait for QuizService {
    fn get_questions(&self) -> Vec<Question> {
        self.catalog.questions().to_vec()
    }

    fn preview(&self, responses: &QuestionResponses) -> Result<ScenarioResult> {
        self.catalog.validate(responses)?;
        Ok(compute_scenarios(responses))
    }

    async fn submit(&self, responses: QuestionResponses) -> Result<QuizSubmission> {
        let result = self.preview(&responses)?;
        let session_id = Self::new_session_id();

        self.repository
            .save_responses(session_id.clone(), responses)
            .await?;
        self.repository
            .save_result(NewQuizResult::from_scenario(session_id.clone(), &result))
            .await
            .inspect_err(|e| error!("Failed to store result for {}: {}", session_id, e))?;

        info!(
            "Stored quiz session {} (profile {}, success score {})",
            session_id, result.profile, result.success_score
        );
        Ok(QuizSubmission { session_id, result })
    }

    fn get_session(&self, session_id: &str) -> Result<QuizSession> {
        self.repository.get_session(session_id)?.ok_or_else(|| {
            DatabaseError::NotFound(format!("No quiz session '{}'", session_id)).into()
        })
    }

    fn get_result(&self, session_id: &str) -> Result<QuizResult> {
        self.repository.get_result(session_id)?.ok_or_else(|| {
            DatabaseError::NotFound(format!("No quiz result for session '{}'", session_id)).into()
        })
    }

    async fn delete_session(&self, session_id: String) -> Result<usize> {
        self.repository.delete_session(session_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants as q;
    use crate::errors::{Error, ValidationError};
    use crate::scenarios::InvestmentProfile;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::RwLock;

    // ============== Mock Repository ==============

    #[derive(Default)]
    struct MockQuizRepository {
        sessions: RwLock<HashMap<String, QuizSession>>,
        results: RwLock<HashMap<String, QuizResult>>,
        fail_results: bool,
    }

    #[async_trait]
    impl QuizRepositoryTrait for MockQuizRepository {
        async fn save_responses(
            &self,
            session_id: String,
            responses: QuestionResponses,
        ) -> Result<QuizSession> {
            let session = QuizSession {
                session_id: session_id.clone(),
                responses,
                created_at: Utc::now().naive_utc(),
            };
            self.sessions
                .write()
                .unwrap()
                .insert(session_id, session.clone());
            Ok(session)
        }

        async fn save_result(&self, new_result: NewQuizResult) -> Result<QuizResult> {
            if self.fail_results {
                return Err(Error::Repository("disk full".to_string()));
            }
            let result = QuizResult {
                session_id: new_result.session_id.clone(),
                conservative_outcome: new_result.conservative_outcome,
                moderate_outcome: new_result.moderate_outcome,
                aggressive_outcome: new_result.aggressive_outcome,
                recommended_profile: new_result.recommended_profile,
                success_score: new_result.success_score,
                created_at: Utc::now().naive_utc(),
            };
            self.results
                .write()
                .unwrap()
                .insert(new_result.session_id, result.clone());
            Ok(result)
        }

        fn get_session(&self, session_id: &str) -> Result<Option<QuizSession>> {
            Ok(self.sessions.read().unwrap().get(session_id).cloned())
        }

        fn get_result(&self, session_id: &str) -> Result<Option<QuizResult>> {
            Ok(self.results.read().unwrap().get(session_id).cloned())
        }

        async fn delete_session(&self, session_id: String) -> Result<usize> {
            self.results.write().unwrap().remove(&session_id);
            Ok(self
                .sessions
                .write()
                .unwrap()
                .remove(&session_id)
                .map_or(0, |_| 1))
        }
    }

    fn sample_responses() -> QuestionResponses {
        QuestionResponses::new()
            .with(q::NAME, "Ada")
            .with(q::INITIAL_INVESTMENT, 1i64)
            .with(q::MONTHLY_CONTRIBUTION, 1i64)
            .with(q::TIME_HORIZON, 1i64)
            .with(q::RISK_TOLERANCE, 3i64)
    }

    #[tokio::test]
    async fn submit_stores_responses_and_result() {
        let repository = Arc::new(MockQuizRepository::default());
        let service = QuizService::new(repository.clone());

        let submission = service.submit(sample_responses()).await.unwrap();

        assert!(submission.session_id.starts_with(SESSION_ID_PREFIX));
        assert_eq!(submission.result, compute_scenarios(&sample_responses()));

        let session = service.get_session(&submission.session_id).unwrap();
        assert_eq!(session.responses, sample_responses());

        let stored = service.get_result(&submission.session_id).unwrap();
        assert_eq!(stored.scenario(), submission.result);
        assert_eq!(stored.recommended_profile, InvestmentProfile::Conservative);
    }

    #[tokio::test]
    async fn each_submission_gets_a_fresh_session() {
        let service = QuizService::new(Arc::new(MockQuizRepository::default()));

        let first = service.submit(sample_responses()).await.unwrap();
        let second = service.submit(sample_responses()).await.unwrap();

        assert_ne!(first.session_id, second.session_id);
        assert_eq!(first.result, second.result);
    }

    #[tokio::test]
    async fn invalid_answers_are_not_stored() {
        let repository = Arc::new(MockQuizRepository::default());
        let service = QuizService::new(repository.clone());

        let err = service
            .submit(QuestionResponses::new().with(q::TIME_HORIZON, 9i64))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Validation(ValidationError::AnswerOutOfRange { .. })
        ));
        assert!(repository.sessions.read().unwrap().is_empty());
    }

    #[tokio::test]
    async fn result_write_failures_propagate() {
        let repository = Arc::new(MockQuizRepository {
            fail_results: true,
            ..Default::default()
        });
        let service = QuizService::new(repository);

        let err = service.submit(sample_responses()).await.unwrap_err();
        assert!(matches!(err, Error::Repository(_)));
    }

    #[test]
    fn preview_scores_an_empty_quiz() {
        let service = QuizService::new(Arc::new(MockQuizRepository::default()));
        let result = service.preview(&QuestionResponses::new()).unwrap();

        assert_eq!(result.profile, InvestmentProfile::Conservative);
        assert_eq!(result.success_score, 10);
    }

    #[test]
    fn unknown_sessions_are_not_found() {
        let service = QuizService::new(Arc::new(MockQuizRepository::default()));

        assert!(matches!(
            service.get_result("session_missing"),
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
        assert!(matches!(
            service.get_session("session_missing"),
            Err(Error::Database(DatabaseError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn delete_removes_the_session() {
        let service = QuizService::new(Arc::new(MockQuizRepository::default()));
        let submission = service.submit(sample_responses()).await.unwrap();

        assert_eq!(
            service
                .delete_session(submission.session_id.clone())
                .await
                .unwrap(),
            1
        );
        assert!(service.get_result(&submission.session_id).is_err());
        assert_eq!(
            service.delete_session(submission.session_id).await.unwrap(),
            0
        );
    }

    #[test]
    fn questions_come_from_the_catalog() {
        let catalog = QuestionCatalog::new(vec![Question::choice("only", "Only?", &["a", "b"])]);
        let service =
            QuizService::with_catalog(Arc::new(MockQuizRepository::default()), catalog);

        let questions = service.get_questions();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, "only");
    }
}
