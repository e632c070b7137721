//! Scenario domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, ValidationError};

/// Ordered risk categories, most cautious first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InvestmentProfile {
    Conservative,
    ModerateConservative,
    Balanced,
    Growth,
    Aggressive,
}

impl InvestmentProfile {
    pub const ALL: [InvestmentProfile; 5] = [
        InvestmentProfile::Conservative,
        InvestmentProfile::ModerateConservative,
        InvestmentProfile::Balanced,
        InvestmentProfile::Growth,
        InvestmentProfile::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentProfile::Conservative => "conservative",
            InvestmentProfile::ModerateConservative => "moderate-conservative",
            InvestmentProfile::Balanced => "balanced",
            InvestmentProfile::Growth => "growth",
            InvestmentProfile::Aggressive => "aggressive",
        }
    }

    /// Label shown on the results dashboard.
    pub fn display_label(&self) -> &'static str {
        match self {
            InvestmentProfile::Conservative => "Conservative Investor",
            InvestmentProfile::ModerateConservative => "Moderate Conservative",
            InvestmentProfile::Balanced => "Balanced Investor",
            InvestmentProfile::Growth => "Growth-Oriented",
            InvestmentProfile::Aggressive => "Aggressive Investor",
        }
    }
}

impl fmt::Display for InvestmentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvestmentProfile::ALL
            .into_iter()
            .find(|profile| profile.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown investment profile '{}'",
                    s
                )))
            })
    }
}

/// Output of the scoring engine for one session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub conservative: u64,
    pub moderate: u64,
    pub aggressive: u64,
    pub profile: InvestmentProfile,
    pub success_score: u8,
}

/// Group scores, each a weighted mean divided by 5.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub behavioral: f64,
    pub background: f64,
    pub health: f64,
    /// Blend of the three group scores, before the percentage scaling.
    pub success_raw: f64,
}

/// Annual growth rates after the success-score adjustment.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRates {
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

/// Bucketed projection inputs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInputs {
    pub principal: f64,
    pub monthly_contribution: f64,
    pub years: f64,
}

/// Every intermediate value of one engine run.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioBreakdown {
    pub scores: SubScores,
    pub rate_adjustment: f64,
    pub rates: GrowthRates,
    pub inputs: ProjectionInputs,
    pub risk_tolerance: i64,
    pub result: ScenarioResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_round_trips_through_its_wire_name() {
        for profile in InvestmentProfile::ALL {
            assert_eq!(profile.as_str().parse::<InvestmentProfile>().unwrap(), profile);
        }
        assert!("reckless".parse::<InvestmentProfile>().is_err());
    }

    #[test]
    fn profile_serializes_kebab_case() {
        let json = serde_json::to_string(&InvestmentProfile::ModerateConservative).unwrap();
        assert_eq!(json, "\"moderate-conservative\"");
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = ScenarioResult {
            conservative: 1,
            moderate: 2,
            aggressive: 3,
            profile: InvestmentProfile::Growth,
            success_score: 12,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["successScore"], 12);
        assert_eq!(json["profile"], "growth");
    }
}
