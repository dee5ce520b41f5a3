use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sepsis severity. `Critical` is reserved for the overall level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SepsisRiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

/// One line of a screening tool, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Criterion {
    pub id: String,
    pub description: String,
    pub met: bool,
    pub points: u32,
    /// False when the input behind this criterion was missing.
    pub available: bool,
}

/// qSOFA, SIRS or NEWS2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SepsisScore {
    pub name: String,
    pub score: u32,
    pub max_score: u32,
    pub risk_level: SepsisRiskLevel,
    pub band: String,
    pub interpretation: String,
    pub criteria: Vec<Criterion>,
    pub recommendations: Vec<String>,
}

impl SepsisScore {
    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DataCompleteness {
    pub available: u32,
    pub expected: u32,
    pub fraction: f64,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SepsisRiskResult {
    pub patient_id: String,
    pub qsofa: SepsisScore,
    pub sirs: SepsisScore,
    pub news2: SepsisScore,
    pub overall_risk: SepsisRiskLevel,
    pub recommendations: Vec<String>,
    pub data_completeness: DataCompleteness,
    /// Set when too few inputs were available for the scores to be trusted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caveat: Option<String>,
}
