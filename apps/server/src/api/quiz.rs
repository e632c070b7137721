use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState, models::QuizResultView};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use finquiz_core::errors::{DatabaseError, Error as CoreError};
use finquiz_core::quiz::Question;
use finquiz_core::sessions::{QuizSession, QuizSubmission};
use finquiz_core::{QuestionResponses, ScenarioResult};

async fn get_questions(State(state): State<Arc<AppState>>) -> Json<Vec<Question>> {
    Json(state.quiz_service.get_questions())
}

async fn preview_scenarios(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuestionResponses>, JsonRejection>,
) -> ApiResult<Json<ScenarioResult>> {
    let Json(responses) = payload?;
    let result = state.quiz_service.preview(&responses)?;
    Ok(Json(result))
}

async fn submit_quiz(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuestionResponses>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<QuizSubmission>)> {
    let Json(responses) = payload?;
    let submission = state.quiz_service.submit(responses).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

async fn get_session(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<QuizSession>> {
    let session = state.quiz_service.get_session(&id)?;
    Ok(Json(session))
}

async fn get_result(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<QuizResultView>> {
    let result = state.quiz_service.get_result(&id)?;
    Ok(Json(QuizResultView::from(result)))
}

async fn delete_session(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let removed = state.quiz_service.delete_session(id.clone()).await?;
    if removed == 0 {
        return Err(
            CoreError::from(DatabaseError::NotFound(format!("No quiz session '{}'", id))).into(),
        );
    }
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quiz/questions", get(get_questions))
        .route("/quiz/scenarios", post(preview_scenarios))
        .route("/quiz/sessions", post(submit_quiz))
        .route("/quiz/sessions/{id}", get(get_session).delete(delete_session))
        .route("/quiz/sessions/{id}/result", get(get_result))
}
