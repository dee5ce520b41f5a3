//! vigil-scoring
//!
//! Deterministic clinical risk scores: qSOFA, SIRS and NEWS2 sepsis
//! screening, the Morse Fall Scale, the LACE readmission index and the
//! Braden pressure ulcer scale, plus the composite aggregator that runs the
//! last three together. Pure functions over `vigil-core` types.

pub mod composite;
pub mod error;
pub mod scale;
pub mod scorers;
pub mod sepsis;

use vigil_core::models::risk_factors::PatientRiskFactors;
use vigil_core::models::risk_score::{RiskLevel, RiskScore};

use error::ScoringError;
use scale::Scale;

/// Trait implemented by each scorer that consumes [`PatientRiskFactors`].
pub trait RiskScorer: Send + Sync {
    /// Unique identifier (e.g., "fall_risk").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Morse Fall Scale").
    fn name(&self) -> &str;

    /// The scale the raw score is banded against.
    fn scale(&self) -> &Scale<RiskLevel>;

    /// The unbanded point total.
    fn raw_score(&self, factors: &PatientRiskFactors) -> Result<u32, ScoringError>;

    /// Patient-specific lines appended after the band's recommendations.
    fn extra_recommendations(&self, _factors: &PatientRiskFactors, _score: &RiskScore) -> Vec<String> {
        Vec::new()
    }

    fn score(&self, factors: &PatientRiskFactors) -> Result<RiskScore, ScoringError> {
        let raw = self.raw_score(factors)?;
        let mut score = self.scale().assess(raw)?;
        let extra = self.extra_recommendations(factors, &score);
        score.recommendations.extend(extra);

        tracing::debug!(
            scorer = self.id(),
            score = score.score,
            level = score.risk_level.as_str(),
            "risk score computed"
        );
        Ok(score)
    }
}

/// Return all registered scorers.
pub fn all_scorers() -> Vec<Box<dyn RiskScorer>> {
    vec![
        Box::new(scorers::fall::FallRisk),
        Box::new(scorers::readmission::ReadmissionRisk),
        Box::new(scorers::pressure_ulcer::PressureUlcerRisk),
    ]
}

/// Definitions of every scale the engine bands against, sepsis screens
/// first.
pub fn scale_definitions() -> Result<Vec<scale::ScaleDefinition>, ScoringError> {
    let mut definitions = vec![
        sepsis::QSOFA.definition()?,
        sepsis::SIRS.definition()?,
        sepsis::NEWS2.definition()?,
    ];
    for scorer in all_scorers() {
        definitions.push(scorer.scale().definition()?);
    }
    Ok(definitions)
}

/// Look up a scorer by ID.
pub fn get_scorer(id: &str) -> Option<Box<dyn RiskScorer>> {
    all_scorers().into_iter().find(|s| s.id() == id)
}

pub(crate) fn validate_age(age: u32) -> Result<(), ScoringError> {
    if age > 130 {
        return Err(ScoringError::InvalidFactor {
            field: "age".to_string(),
            message: format!("{age} exceeds 130"),
        });
    }
    Ok(())
}
