//! Quiz domain models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKind {
    /// One of the listed answers, scored 1-5
    Choice,
    /// Identity field; stored but never scored
    FreeText,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    pub text: String,
    pub value: i64,
}

/// A single step of the questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub description: Option<String>,
    pub kind: QuestionKind,
    pub answers: Vec<AnswerOption>,
}

impl Question {
    /// Choice question whose answers are valued 1..=n in order.
    pub fn choice(id: &str, prompt: &str, answers: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            description: None,
            kind: QuestionKind::Choice,
            answers: answers
                .iter()
                .zip(1..)
                .map(|(text, value)| AnswerOption {
                    text: text.to_string(),
                    value,
                })
                .collect(),
        }
    }

    pub fn free_text(id: &str, prompt: &str) -> Self {
        Self {
            id: id.to_string(),
            prompt: prompt.to_string(),
            description: None,
            kind: QuestionKind::FreeText,
            answers: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn accepts(&self, value: i64) -> bool {
        self.answers.iter().any(|answer| answer.value == value)
    }
}
