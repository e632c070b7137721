//! Response shapes that exist only at the HTTP boundary.

use finquiz_core::sessions::QuizResult;
use serde::Serialize;

/// Height in pixels of the tallest outcome bar on the results dashboard.
pub const MAX_BAR_HEIGHT: f64 = 300.0;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeBars {
    pub conservative: f64,
    pub moderate: f64,
    pub aggressive: f64,
}

impl OutcomeBars {
    /// Scales each outcome against the largest one. All bars are flat when
    /// every outcome is zero.
    pub fn scaled(conservative: u64, moderate: u64, aggressive: u64) -> Self {
        let max = conservative.max(moderate).max(aggressive);
        let height = |value: u64| {
            if max == 0 {
                0.0
            } else {
                value as f64 / max as f64 * MAX_BAR_HEIGHT
            }
        };
        Self {
            conservative: height(conservative),
            moderate: height(moderate),
            aggressive: height(aggressive),
        }
    }
}

/// A stored result plus what the dashboard needs to draw it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultView {
    #[serde(flatten)]
    pub result: QuizResult,
    pub profile_label: &'static str,
    pub bars: OutcomeBars,
}

impl From<QuizResult> for QuizResultView {
    fn from(result: QuizResult) -> Self {
        Self {
            profile_label: result.recommended_profile.display_label(),
            bars: OutcomeBars::scaled(
                result.conservative_outcome,
                result.moderate_outcome,
                result.aggressive_outcome,
            ),
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use finquiz_core::InvestmentProfile;

    #[test]
    fn tallest_bar_reaches_max_height() {
        let bars = OutcomeBars::scaled(4536, 4573, 4633);
        assert_eq!(bars.aggressive, MAX_BAR_HEIGHT);
        assert!(bars.conservative < bars.moderate);
        assert!(bars.moderate < bars.aggressive);
        assert!((bars.conservative - 293.718972588).abs() < 1e-6);
    }

    #[test]
    fn zero_outcomes_draw_flat_bars() {
        assert_eq!(
            OutcomeBars::scaled(0, 0, 0),
            OutcomeBars {
                conservative: 0.0,
                moderate: 0.0,
                aggressive: 0.0
            }
        );
    }

    #[test]
    fn view_carries_profile_label() {
        let created_at = NaiveDate::from_ymd_opt(2026, 10, 1)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        let view = QuizResultView::from(QuizResult {
            session_id: "session_x".to_string(),
            conservative_outcome: 100,
            moderate_outcome: 200,
            aggressive_outcome: 400,
            recommended_profile: InvestmentProfile::Growth,
            success_score: 12,
            created_at,
        });

        assert_eq!(view.profile_label, "Growth-Oriented");
        assert_eq!(view.bars.conservative, 75.0);
        assert_eq!(view.bars.moderate, 150.0);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["recommendedProfile"], "growth");
        assert_eq!(json["profileLabel"], "Growth-Oriented");
        assert_eq!(json["bars"]["aggressive"], 300.0);
    }
}
