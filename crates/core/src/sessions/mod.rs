//! Sessions module - submitting a quiz and reading back its result.

mod sessions_model;
mod sessions_service;
mod sessions_traits;

pub use sessions_model::{NewQuizResult, QuizResult, QuizSession, QuizSubmission};
pub use sessions_service::QuizService;
pub use sessions_traits::{QuizRepositoryTrait, QuizServiceTrait};
