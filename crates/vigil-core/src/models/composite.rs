use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk_score::{RiskLevel, RiskScore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ComponentScores {
    pub fall_risk: RiskScore,
    pub readmission_risk: RiskScore,
    pub pressure_ulcer_risk: RiskScore,
}

impl ComponentScores {
    pub fn iter(&self) -> impl Iterator<Item = &RiskScore> {
        [
            &self.fall_risk,
            &self.readmission_risk,
            &self.pressure_ulcer_risk,
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RiskScoresResult {
    pub patient_id: String,
    pub overall_risk: RiskLevel,
    pub scores: ComponentScores,
    pub primary_recommendations: Vec<String>,
    pub timestamp: jiff::Timestamp,
}
