//! Runs the Morse, LACE and Braden scorers over one set of risk factors.

use vigil_core::clock::Clock;
use vigil_core::config::EngineConfig;
use vigil_core::models::composite::{ComponentScores, RiskScoresResult};
use vigil_core::models::risk_factors::PatientRiskFactors;
use vigil_core::models::risk_score::{RiskLevel, RiskScore};

use crate::RiskScorer;
use crate::error::ScoringError;
use crate::scorers::fall::FallRisk;
use crate::scorers::pressure_ulcer::PressureUlcerRisk;
use crate::scorers::readmission::ReadmissionRisk;

/// Score all three scales. Any scorer failure fails the whole call; a
/// composite is never returned with a component missing.
pub fn assess_risk(
    patient_id: &str,
    factors: &PatientRiskFactors,
    config: &EngineConfig,
    clock: &dyn Clock,
) -> Result<RiskScoresResult, ScoringError> {
    config.validate()?;

    let scores = ComponentScores {
        fall_risk: FallRisk.score(factors)?,
        readmission_risk: ReadmissionRisk.score(factors)?,
        pressure_ulcer_risk: PressureUlcerRisk.score(factors)?,
    };

    let overall_risk = overall_risk(&scores);
    let primary_recommendations = primary_recommendations(
        &scores,
        config.recommendations_per_scorer,
        config.primary_recommendation_limit,
    );

    tracing::debug!(
        overall = overall_risk.as_str(),
        recommendations = primary_recommendations.len(),
        "composite risk computed"
    );

    Ok(RiskScoresResult {
        patient_id: patient_id.to_string(),
        overall_risk,
        scores,
        primary_recommendations,
        timestamp: clock.now(),
    })
}

pub fn overall_risk(scores: &ComponentScores) -> RiskLevel {
    scores
        .iter()
        .map(|s| s.risk_level)
        .max()
        .unwrap_or(RiskLevel::Low)
}

/// Take the first `per_scorer` lines from each score, most severe score
/// first (ties keep fall, readmission, pressure order), drop duplicates and
/// cap at `limit`.
pub fn primary_recommendations(
    scores: &ComponentScores,
    per_scorer: usize,
    limit: usize,
) -> Vec<String> {
    let mut ranked: Vec<&RiskScore> = scores.iter().collect();
    ranked.sort_by(|a, b| b.risk_level.cmp(&a.risk_level));

    let mut merged: Vec<String> = Vec::new();
    for score in ranked {
        for line in score.recommendations.iter().take(per_scorer) {
            if !merged.contains(line) {
                merged.push(line.clone());
            }
        }
    }
    merged.truncate(limit);
    merged
}
