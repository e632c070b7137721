//! Scenario scoring engine.

use log::debug;

use super::scenarios_model::{
    GrowthRates, InvestmentProfile, ProjectionInputs, ScenarioBreakdown, ScenarioResult, SubScores,
};
use crate::constants as q;
use crate::responses::QuestionResponses;

/// Divisor applied to every group score.
const SCORE_SCALE: f64 = 5.0;

/// `6 - raw` flips a 1-5 answer.
const INVERSION_PIVOT: i64 = 6;

const BEHAVIORAL_SHARE: f64 = 0.50;
const BACKGROUND_SHARE: f64 = 0.25;
const HEALTH_SHARE: f64 = 0.25;

const RISK_TOLERANCE_DEFAULT: i64 = 3;

// The success score is compared against 3 even though it is already divided by 5.
const ADJUSTMENT_PIVOT: f64 = 3.0;
const ADJUSTMENT_FACTOR: f64 = 0.015;

struct WeightedField {
    question_id: &'static str,
    default: i64,
    weight: f64,
    inverted: bool,
}

impl WeightedField {
    const fn new(question_id: &'static str, default: i64, weight: f64) -> Self {
        Self {
            question_id,
            default,
            weight,
            inverted: false,
        }
    }

    const fn inverted(question_id: &'static str, default: i64, weight: f64) -> Self {
        Self {
            question_id,
            default,
            weight,
            inverted: true,
        }
    }

    fn value(&self, responses: &QuestionResponses) -> f64 {
        let raw = responses.numeric_or(self.question_id, self.default);
        let effective = if self.inverted {
            INVERSION_PIVOT - raw
        } else {
            raw
        };
        effective as f64
    }
}

const BEHAVIORAL_FIELDS: [WeightedField; 6] = [
    WeightedField::new(q::SPENDING_DISCIPLINE, 3, 0.25),
    WeightedField::new(q::CURRENT_SAVINGS, 2, 0.25),
    WeightedField::new(q::PANIC_REACTION, 3, 0.20),
    WeightedField::new(q::LONG_TERM_PATIENCE, 3, 0.15),
    WeightedField::new(q::FINANCIAL_KNOWLEDGE, 2, 0.10),
    WeightedField::inverted(q::PEER_INFLUENCE, 3, 0.05),
];

const BACKGROUND_FIELDS: [WeightedField; 4] = [
    WeightedField::new(q::EDUCATION, 2, 0.30),
    WeightedField::new(q::FAMILY_BACKGROUND, 2, 0.25),
    WeightedField::new(q::YEARS_WORKING, 2, 0.25),
    WeightedField::new(q::AGE, 2, 0.20),
];

const HEALTH_FIELDS: [WeightedField; 2] = [
    WeightedField::new(q::DEBT_STATUS, 3, 0.6),
    WeightedField::new(q::EMERGENCY_FUND, 2, 0.4),
];

struct RateBand {
    base: f64,
    floor: f64,
}

impl RateBand {
    fn adjusted(&self, adjustment: f64) -> f64 {
        (self.base + adjustment).max(self.floor)
    }
}

const CONSERVATIVE_BAND: RateBand = RateBand {
    base: 0.04,
    floor: 0.02,
};
const MODERATE_BAND: RateBand = RateBand {
    base: 0.07,
    floor: 0.04,
};
const AGGRESSIVE_BAND: RateBand = RateBand {
    base: 0.11,
    floor: 0.06,
};

// Bucket tables: answer code → magnitude. Any other code takes the fallback.
const PRINCIPAL_BUCKETS: [(i64, f64); 4] =
    [(1, 3_000.0), (2, 15_000.0), (3, 62_500.0), (4, 300_000.0)];
const PRINCIPAL_FALLBACK: f64 = 500_000.0;

const CONTRIBUTION_BUCKETS: [(i64, f64); 4] =
    [(1, 250.0), (2, 1_000.0), (3, 3_250.0), (4, 10_000.0)];
const CONTRIBUTION_FALLBACK: f64 = 15_000.0;

const HORIZON_BUCKETS: [(i64, f64); 4] = [(1, 0.5), (2, 2.0), (3, 5.0), (4, 10.0)];
const HORIZON_FALLBACK: f64 = 20.0;

fn bucket(table: &[(i64, f64)], fallback: f64, code: Option<i64>) -> f64 {
    code.and_then(|code| {
        table
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|(_, magnitude)| *magnitude)
    })
    .unwrap_or(fallback)
}

/// Sum of `value * weight` over the pairs, in order.
pub fn weighted_sum<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    pairs
        .into_iter()
        .fold(0.0, |acc, (value, weight)| acc + value * weight)
}

fn group_score(responses: &QuestionResponses, fields: &[WeightedField]) -> f64 {
    weighted_sum(
        fields
            .iter()
            .map(|field| (field.value(responses), field.weight)),
    ) / SCORE_SCALE
}

fn sub_scores(responses: &QuestionResponses) -> SubScores {
    let behavioral = group_score(responses, &BEHAVIORAL_FIELDS);
    let background = group_score(responses, &BACKGROUND_FIELDS);
    let health = group_score(responses, &HEALTH_FIELDS);
    let success_raw = weighted_sum([
        (behavioral, BEHAVIORAL_SHARE),
        (background, BACKGROUND_SHARE),
        (health, HEALTH_SHARE),
    ]);

    SubScores {
        behavioral,
        background,
        health,
        success_raw,
    }
}

/// Future value of `principal` plus `monthly_payment` each month, compounded
/// monthly at `annual_rate` for `years`.
///
/// A zero duration returns `principal + 12 * monthly_payment`. A zero rate
/// (never produced by the engine) returns the undiscounted sum of payments.
pub fn future_value(principal: f64, annual_rate: f64, years: f64, monthly_payment: f64) -> f64 {
    if years == 0.0 {
        return principal + monthly_payment * 12.0;
    }

    let monthly_rate = annual_rate / 12.0;
    let months = years * 12.0;
    if monthly_rate == 0.0 {
        return principal + monthly_payment * months;
    }

    let growth = (1.0 + monthly_rate).powf(months);
    principal * growth + monthly_payment * (growth - 1.0) / monthly_rate
}

/// First matching rung wins; `behavioral` is the raw group score.
pub fn select_profile(behavioral: f64, risk_tolerance: i64) -> InvestmentProfile {
    if behavioral < 2.5 || risk_tolerance <= 1 {
        InvestmentProfile::Conservative
    } else if behavioral < 3.0 || risk_tolerance == 2 {
        InvestmentProfile::ModerateConservative
    } else if behavioral < 3.5 || risk_tolerance == 3 {
        InvestmentProfile::Balanced
    } else if behavioral < 4.0 || risk_tolerance == 4 {
        InvestmentProfile::Growth
    } else {
        InvestmentProfile::Aggressive
    }
}

fn to_currency_units(value: f64) -> u64 {
    value.round().max(0.0) as u64
}

fn to_success_score(success_raw: f64) -> u8 {
    (success_raw / SCORE_SCALE * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Runs the engine and keeps every intermediate value.
pub fn analyze(responses: &QuestionResponses) -> ScenarioBreakdown {
    let scores = sub_scores(responses);

    let rate_adjustment = (scores.success_raw - ADJUSTMENT_PIVOT) * ADJUSTMENT_FACTOR;
    let rates = GrowthRates {
        conservative: CONSERVATIVE_BAND.adjusted(rate_adjustment),
        moderate: MODERATE_BAND.adjusted(rate_adjustment),
        aggressive: AGGRESSIVE_BAND.adjusted(rate_adjustment),
    };

    let inputs = ProjectionInputs {
        principal: bucket(
            &PRINCIPAL_BUCKETS,
            PRINCIPAL_FALLBACK,
            responses.numeric(q::INITIAL_INVESTMENT),
        ),
        monthly_contribution: bucket(
            &CONTRIBUTION_BUCKETS,
            CONTRIBUTION_FALLBACK,
            responses.numeric(q::MONTHLY_CONTRIBUTION),
        ),
        years: bucket(
            &HORIZON_BUCKETS,
            HORIZON_FALLBACK,
            responses.numeric(q::TIME_HORIZON),
        ),
    };

    let project = |rate: f64| {
        to_currency_units(future_value(
            inputs.principal,
            rate,
            inputs.years,
            inputs.monthly_contribution,
        ))
    };

    let risk_tolerance = responses.numeric_or(q::RISK_TOLERANCE, RISK_TOLERANCE_DEFAULT);
    let result = ScenarioResult {
        conservative: project(rates.conservative),
        moderate: project(rates.moderate),
        aggressive: project(rates.aggressive),
        profile: select_profile(scores.behavioral, risk_tolerance),
        success_score: to_success_score(scores.success_raw),
    };

    debug!(
        "Scored {} answers: profile={}, success_score={}, rates={:.4}/{:.4}/{:.4}",
        responses.len(),
        result.profile,
        result.success_score,
        rates.conservative,
        rates.moderate,
        rates.aggressive
    );

    ScenarioBreakdown {
        scores,
        rate_adjustment,
        rates,
        inputs,
        risk_tolerance,
        result,
    }
}

/// Converts quiz answers into three growth projections, a profile and a
/// success score. Never fails; unanswered questions take their defaults.
pub fn compute_scenarios(responses: &QuestionResponses) -> ScenarioResult {
    analyze(responses).result
}
