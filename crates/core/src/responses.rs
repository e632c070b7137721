//! Quiz answers as submitted by the form flow.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single answer: an ordinal choice or free text.
///
/// Serialized untagged, so `{"age": 2, "name": "Ada"}` maps to
/// `Numeric(2)` and `Text("Ada")`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ResponseValue {
    Numeric(i64),
    Text(String),
}

impl ResponseValue {
    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            ResponseValue::Numeric(value) => Some(*value),
            ResponseValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseValue::Numeric(_) => None,
            ResponseValue::Text(text) => Some(text),
        }
    }
}

impl From<i64> for ResponseValue {
    fn from(value: i64) -> Self {
        ResponseValue::Numeric(value)
    }
}

impl From<&str> for ResponseValue {
    fn from(value: &str) -> Self {
        ResponseValue::Text(value.to_string())
    }
}

impl From<String> for ResponseValue {
    fn from(value: String) -> Self {
        ResponseValue::Text(value)
    }
}

/// Question identifier → answer map for one quiz session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct QuestionResponses(BTreeMap<String, ResponseValue>);

impl QuestionResponses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any previous answer to the same question.
    pub fn insert(&mut self, question_id: impl Into<String>, value: impl Into<ResponseValue>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn with(mut self, question_id: impl Into<String>, value: impl Into<ResponseValue>) -> Self {
        self.insert(question_id, value);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<&ResponseValue> {
        self.0.get(question_id)
    }

    /// Numeric answer for `question_id`; text answers read as unanswered.
    pub fn numeric(&self, question_id: &str) -> Option<i64> {
        self.0.get(question_id).and_then(ResponseValue::as_numeric)
    }

    pub fn numeric_or(&self, question_id: &str, default: i64) -> i64 {
        self.numeric(question_id).unwrap_or(default)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResponseValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for QuestionResponses
where
    K: Into<String>,
    V: Into<ResponseValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_numeric_and_text_answers() {
        let responses: QuestionResponses =
            serde_json::from_str(r#"{"age": 2, "name": "Ada", "time_horizon": 5}"#).unwrap();

        assert_eq!(responses.numeric("age"), Some(2));
        assert_eq!(responses.numeric("time_horizon"), Some(5));
        assert_eq!(responses.get("name").and_then(|v| v.as_text()), Some("Ada"));
    }

    #[test]
    fn text_answers_read_as_unanswered_numerically() {
        let responses = QuestionResponses::new().with("risk_tolerance", "high");

        assert!(responses.contains("risk_tolerance"));
        assert_eq!(responses.numeric("risk_tolerance"), None);
        assert_eq!(responses.numeric_or("risk_tolerance", 3), 3);
    }

    #[test]
    fn serializes_back_to_a_flat_object() {
        let responses: QuestionResponses = [("age", 4i64)].into_iter().collect();
        let json = serde_json::to_value(&responses).unwrap();
        assert_eq!(json, serde_json::json!({ "age": 4 }));
    }
}
