use log::debug;

use super::quiz_model::{Question, QuestionKind};
use crate::constants as q;
use crate::errors::{Result, ValidationError};
use crate::responses::{QuestionResponses, ResponseValue};

/// Ordered questionnaire presented by the form flow.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// The full financial profile questionnaire.
    pub fn standard() -> Self {
        Self::new(vec![
            Question::free_text(q::NAME, "What should we call you?"),
            Question::choice(
                q::AGE,
                "What is your age?",
                &["18-25", "26-35", "36-45", "46-55", "56+"],
            ),
            Question::choice(
                q::INITIAL_INVESTMENT,
                "How much are you planning to invest initially?",
                &[
                    "$1,000 - $5,000",
                    "$5,000 - $25,000",
                    "$25,000 - $100,000",
                    "$100,000 - $500,000",
                    "$500,000+",
                ],
            ),
            Question::choice(
                q::TIME_HORIZON,
                "What is your investment time horizon?",
                &[
                    "Less than 1 year",
                    "1-3 years",
                    "3-7 years",
                    "7-15 years",
                    "15+ years",
                ],
            ),
            Question::choice(
                q::RISK_TOLERANCE,
                "How would you describe your risk tolerance?",
                &[
                    "Very Conservative - Prefer safety over growth",
                    "Conservative - Modest growth with low risk",
                    "Moderate - Balanced growth and risk",
                    "Aggressive - Willing to accept volatility",
                    "Very Aggressive - Maximize growth potential",
                ],
            ),
            Question::choice(
                q::MARKET_EXPERIENCE,
                "What is your investment experience?",
                &[
                    "No experience",
                    "Beginner - Some familiarity",
                    "Intermediate - Regular investor",
                    "Advanced - Active trader",
                    "Expert - Professional investor",
                ],
            ),
            Question::choice(
                q::MONTHLY_CONTRIBUTION,
                "How much can you invest monthly?",
                &[
                    "$0 - $500",
                    "$500 - $1,500",
                    "$1,500 - $5,000",
                    "$5,000 - $15,000",
                    "$15,000+",
                ],
            ),
            Question::choice(
                q::FINANCIAL_GOALS,
                "What is your primary financial goal?",
                &[
                    "Capital preservation",
                    "Steady income",
                    "Moderate growth",
                    "Aggressive growth",
                    "Wealth maximization",
                ],
            ),
            Question::choice(
                q::DEBT_STATUS,
                "What is your current debt situation?",
                &[
                    "High debt (more than 50% of assets)",
                    "Moderate debt (25-50% of assets)",
                    "Some debt (10-25% of assets)",
                    "Minimal debt (less than 10%)",
                    "No debt",
                ],
            ),
            Question::choice(
                q::EMERGENCY_FUND,
                "How many months of expenses could your savings cover?",
                &[
                    "None",
                    "Less than 1 month",
                    "1-3 months",
                    "3-6 months",
                    "More than 6 months",
                ],
            ),
            Question::choice(
                q::SPENDING_DISCIPLINE,
                "How closely do you follow a budget?",
                &[
                    "I rarely track spending",
                    "I check occasionally",
                    "I keep a loose budget",
                    "I budget most months",
                    "I track every expense",
                ],
            ),
            Question::choice(
                q::CURRENT_SAVINGS,
                "What share of your income do you save?",
                &["Nothing", "Under 5%", "5-10%", "10-20%", "More than 20%"],
            ),
            Question::choice(
                q::PANIC_REACTION,
                "Your portfolio drops 20% in a month. What do you do?",
                &[
                    "Sell everything",
                    "Sell some positions",
                    "Wait and watch",
                    "Hold and keep contributing",
                    "Buy more",
                ],
            )
            .with_description("Think about how you would actually react, not how you should."),
            Question::choice(
                q::LONG_TERM_PATIENCE,
                "How long can you leave an investment untouched?",
                &[
                    "A few weeks",
                    "A few months",
                    "About a year",
                    "Several years",
                    "A decade or more",
                ],
            ),
            Question::choice(
                q::FINANCIAL_KNOWLEDGE,
                "How would you rate your financial knowledge?",
                &["None", "Basic", "Average", "Good", "Expert"],
            ),
            Question::choice(
                q::PEER_INFLUENCE,
                "How much do friends and social media shape your money decisions?",
                &["Not at all", "A little", "Somewhat", "A lot", "Completely"],
            ),
            Question::choice(
                q::EDUCATION,
                "What is your highest level of education?",
                &[
                    "High school or less",
                    "Some college",
                    "Bachelor's degree",
                    "Master's degree",
                    "Doctorate or professional degree",
                ],
            ),
            Question::choice(
                q::FAMILY_BACKGROUND,
                "How often was money discussed openly in your family?",
                &["Never", "Rarely", "Sometimes", "Often", "Always"],
            ),
            Question::choice(
                q::YEARS_WORKING,
                "How many years have you been working?",
                &[
                    "Less than 2",
                    "2-5",
                    "5-10",
                    "10-20",
                    "More than 20",
                ],
            ),
        ])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == question_id)
    }

    /// Checks every provided answer against its question. Unanswered
    /// questions are allowed; the engine fills in defaults.
    pub fn validate(&self, responses: &QuestionResponses) -> Result<()> {
        for (question_id, value) in responses.iter() {
            let question = self
                .get(question_id)
                .ok_or_else(|| ValidationError::UnknownQuestion(question_id.to_string()))?;

            match (question.kind, value) {
                (QuestionKind::Choice, ResponseValue::Numeric(answer)) => {
                    if !question.accepts(*answer) {
                        return Err(ValidationError::AnswerOutOfRange {
                            question_id: question_id.to_string(),
                            value: *answer,
                        }
                        .into());
                    }
                }
                (QuestionKind::Choice, ResponseValue::Text(_)) => {
                    return Err(ValidationError::UnexpectedAnswerType {
                        question_id: question_id.to_string(),
                        expected: "numeric",
                    }
                    .into());
                }
                (QuestionKind::FreeText, ResponseValue::Text(text)) => {
                    if text.trim().is_empty() {
                        return Err(ValidationError::MissingField(question_id.to_string()).into());
                    }
                }
                (QuestionKind::FreeText, ResponseValue::Numeric(_)) => {
                    return Err(ValidationError::UnexpectedAnswerType {
                        question_id: question_id.to_string(),
                        expected: "text",
                    }
                    .into());
                }
            }
        }

        debug!("Validated {} quiz answers", responses.len());
        Ok(())
    }

    pub fn is_complete(&self, responses: &QuestionResponses) -> bool {
        self.questions
            .iter()
            .all(|question| responses.contains(&question.id))
    }

    /// Percentage of the questionnaire covered after `answered` steps.
    pub fn progress(&self, answered: usize) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        answered.min(self.questions.len()) as f64 / self.questions.len() as f64 * 100.0
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
