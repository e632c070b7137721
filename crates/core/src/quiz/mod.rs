//! Quiz module - the questionnaire and answer validation.

mod quiz_catalog;
mod quiz_model;

pub use quiz_catalog::QuestionCatalog;
pub use quiz_model::{AnswerOption, Question, QuestionKind};
