//! SQLite storage implementation for quiz sessions and results.

mod model;
mod repository;

pub use model::{QuizResponsesDB, QuizResultDB};
pub use repository::QuizRepository;
