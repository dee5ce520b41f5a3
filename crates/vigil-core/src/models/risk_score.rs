use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Four-level risk scale shared by the Morse, LACE and Braden scorers.
///
/// Variant order is severity order, so `Ord` gives `Low < Moderate < High
/// < VeryHigh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very-high",
        }
    }
}

/// Polarity of a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreDirection {
    /// Morse, LACE, NEWS2, qSOFA, SIRS.
    HigherIsWorse,
    /// Braden.
    LowerIsWorse,
}

/// The result of one scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskScore {
    pub name: String,
    pub score: u32,
    /// Present only when the scale has a non-zero floor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u32>,
    pub max_score: u32,
    pub direction: ScoreDirection,
    pub risk_level: RiskLevel,
    /// Clinical band label, e.g. "Mild risk".
    pub band: String,
    pub interpretation: String,
    pub recommendations: Vec<String>,
}

impl RiskScore {
    /// Position of the score on its scale, 0.0 = best and 1.0 = worst,
    /// whichever way the scale points.
    pub fn severity_fraction(&self) -> f64 {
        let min = self.min_score.unwrap_or(0);
        let span = self.max_score.saturating_sub(min);
        if span == 0 {
            return 0.0;
        }
        let offset = f64::from(self.score.saturating_sub(min)) / f64::from(span);
        match self.direction {
            ScoreDirection::HigherIsWorse => offset,
            ScoreDirection::LowerIsWorse => 1.0 - offset,
        }
    }
}
