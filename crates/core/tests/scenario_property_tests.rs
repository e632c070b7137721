//! Property-based tests for the scenario-scoring engine.
//!
//! These tests verify that universal properties hold across every answer
//! combination the questionnaire can produce, using `proptest` for random
//! test case generation.

use finquiz_core::constants as q;
use finquiz_core::quiz::QuestionCatalog;
use finquiz_core::scenarios::{analyze, compute_scenarios, future_value};
use finquiz_core::QuestionResponses;
use proptest::prelude::*;

const SCORED_QUESTIONS: [&str; 17] = [
    q::SPENDING_DISCIPLINE,
    q::CURRENT_SAVINGS,
    q::PANIC_REACTION,
    q::LONG_TERM_PATIENCE,
    q::FINANCIAL_KNOWLEDGE,
    q::PEER_INFLUENCE,
    q::EDUCATION,
    q::FAMILY_BACKGROUND,
    q::YEARS_WORKING,
    q::AGE,
    q::DEBT_STATUS,
    q::EMERGENCY_FUND,
    q::RISK_TOLERANCE,
    q::MARKET_EXPERIENCE,
    q::INITIAL_INVESTMENT,
    q::MONTHLY_CONTRIBUTION,
    q::TIME_HORIZON,
];

// =============================================================================
// Generators
// =============================================================================

/// Generates an answer map where each scored question is either skipped or
/// answered with a value from 1 to 5.
fn arb_responses() -> impl Strategy<Value = QuestionResponses> {
    proptest::collection::vec(proptest::option::of(1i64..=5), SCORED_QUESTIONS.len()).prop_map(
        |answers| {
            SCORED_QUESTIONS
                .iter()
                .zip(answers)
                .filter_map(|(id, answer)| answer.map(|value| (*id, value)))
                .collect::<QuestionResponses>()
        },
    )
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Outcomes are ordered because the adjusted rates are ordered.
    #[test]
    fn prop_outcomes_are_monotonic_in_rate(responses in arb_responses()) {
        let breakdown = analyze(&responses);

        prop_assert!(breakdown.rates.conservative < breakdown.rates.moderate);
        prop_assert!(breakdown.rates.moderate < breakdown.rates.aggressive);

        let result = breakdown.result;
        prop_assert!(result.conservative <= result.moderate);
        prop_assert!(result.moderate <= result.aggressive);
    }

    /// Identical answers give identical output.
    #[test]
    fn prop_scoring_is_deterministic(responses in arb_responses()) {
        prop_assert_eq!(compute_scenarios(&responses), compute_scenarios(&responses.clone()));
    }

    /// Realistic answers keep the success score in its low band.
    #[test]
    fn prop_success_score_stays_in_the_low_band(responses in arb_responses()) {
        let score = compute_scenarios(&responses).success_score;
        prop_assert!((4..=20).contains(&score), "score {} outside 4..=20", score);
    }

    /// Every rate respects its floor and the adjustment is always negative.
    #[test]
    fn prop_rates_respect_their_floors(responses in arb_responses()) {
        let breakdown = analyze(&responses);

        prop_assert!(breakdown.rate_adjustment < 0.0);
        prop_assert!(breakdown.rates.conservative >= 0.02);
        prop_assert!(breakdown.rates.moderate >= 0.04);
        prop_assert!(breakdown.rates.aggressive >= 0.06);
    }

    /// Sub-scores stay within [0.2, 1.0] for answers from 1 to 5.
    #[test]
    fn prop_sub_scores_are_bounded(responses in arb_responses()) {
        let scores = analyze(&responses).scores;
        for score in [scores.behavioral, scores.background, scores.health, scores.success_raw] {
            prop_assert!((0.2 - 1e-9..=1.0 + 1e-9).contains(&score), "score {}", score);
        }
    }

    /// Any generated answer map passes catalog validation.
    #[test]
    fn prop_generated_answers_are_valid(responses in arb_responses()) {
        prop_assert!(QuestionCatalog::standard().validate(&responses).is_ok());
    }

    /// Projected value never falls below the principal plus contributions.
    #[test]
    fn prop_future_value_exceeds_contributions(
        principal in 0.0f64..1_000_000.0,
        rate in 0.01f64..0.2,
        months in 1u32..=240,
        payment in 0.0f64..20_000.0,
    ) {
        let years = f64::from(months) / 12.0;
        let value = future_value(principal, rate, years, payment);
        prop_assert!(value + 1e-6 >= principal + payment * f64::from(months));
    }
}
