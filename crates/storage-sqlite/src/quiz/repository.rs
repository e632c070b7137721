use finquiz_core::sessions::{NewQuizResult, QuizRepositoryTrait, QuizResult, QuizSession};
use finquiz_core::{QuestionResponses, Result};

use super::model::{QuizResponsesDB, QuizResultDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{quiz_responses, quiz_results};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;

use std::sync::Arc;

pub struct QuizRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl QuizRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        QuizRepository { pool, writer }
    }
}

#[async_trait]
impl QuizRepositoryTrait for QuizRepository {
    async fn save_responses(
        &self,
        session_id: String,
        responses: QuestionResponses,
    ) -> Result<QuizSession> {
        let row = QuizResponsesDB::from_domain(session_id, &responses, Utc::now().naive_utc())?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<QuizSession> {
                let stored = diesel::insert_into(quiz_responses::table)
                    .values(&row)
                    .returning(QuizResponsesDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                debug!("Inserted responses for {}", stored.session_id);
                QuizSession::try_from(stored)
            })
            .await
    }

    async fn save_result(&self, new_result: NewQuizResult) -> Result<QuizResult> {
        let row = QuizResultDB::from_domain(new_result, Utc::now().naive_utc())?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<QuizResult> {
                let stored = diesel::insert_into(quiz_results::table)
                    .values(&row)
                    .returning(QuizResultDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                QuizResult::try_from(stored)
            })
            .await
    }

    fn get_session(&self, session_id: &str) -> Result<Option<QuizSession>> {
        let mut conn = get_connection(&self.pool)?;
        let row = quiz_responses::table
            .find(session_id)
            .select(QuizResponsesDB::as_select())
            .first::<QuizResponsesDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(QuizSession::try_from).transpose()
    }

    fn get_result(&self, session_id: &str) -> Result<Option<QuizResult>> {
        let mut conn = get_connection(&self.pool)?;
        let row = quiz_results::table
            .find(session_id)
            .select(QuizResultDB::as_select())
            .first::<QuizResultDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(QuizResult::try_from).transpose()
    }

    async fn delete_session(&self, session_id: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(quiz_results::table.find(&session_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(diesel::delete(quiz_responses::table.find(&session_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
