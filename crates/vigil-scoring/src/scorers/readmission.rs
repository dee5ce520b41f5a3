use vigil_core::models::risk_factors::{Acuity, PatientRiskFactors};
use vigil_core::models::risk_score::{RiskLevel, RiskScore, ScoreDirection};

use crate::RiskScorer;
use crate::error::ScoringError;
use crate::scale::{Band, Scale, ScaleRange};

/// LACE index for 30-day readmission. Length of stay, Acuity,
/// Comorbidity (Charlson), ED visits. Total 0–19.
///
/// Acuity is two-tier: only emergent admissions score (3 points); urgent
/// and elective both score 0.
pub struct ReadmissionRisk;

pub static LACE: Scale<RiskLevel> = Scale {
    name: "LACE Index",
    range: ScaleRange { min: 0, max: 19 },
    direction: ScoreDirection::HigherIsWorse,
    bands: &[
        Band {
            threshold: 0,
            level: RiskLevel::Low,
            label: "Low readmission risk",
            recommendations: &["Standard discharge instructions and routine follow-up"],
        },
        Band {
            threshold: 5,
            level: RiskLevel::Moderate,
            label: "Moderate readmission risk",
            recommendations: &[
                "Primary care follow-up within 7 days of discharge",
                "Medication reconciliation at discharge",
            ],
        },
        Band {
            threshold: 10,
            level: RiskLevel::High,
            label: "High risk of 30-day readmission",
            recommendations: &[
                "Post-discharge follow-up within 48-72 hours",
                "Medication reconciliation at discharge",
                "Home health referral",
            ],
        },
    ],
};

impl RiskScorer for ReadmissionRisk {
    fn id(&self) -> &str {
        "readmission_risk"
    }

    fn name(&self) -> &str {
        "LACE Index"
    }

    fn scale(&self) -> &Scale<RiskLevel> {
        &LACE
    }

    fn raw_score(&self, factors: &PatientRiskFactors) -> Result<u32, ScoringError> {
        Ok(length_of_stay_points(factors.length_of_stay)
            + acuity_points(factors.acuity)
            + comorbidity_points(factors.charlson_score)
            + ed_visit_points(factors.ed_visits_6_months))
    }

    fn extra_recommendations(&self, factors: &PatientRiskFactors, score: &RiskScore) -> Vec<String> {
        if score.risk_level >= RiskLevel::High && !factors.has_chronic_conditions.is_empty() {
            vec![format!(
                "Arrange disease-management follow-up for: {}",
                factors.has_chronic_conditions.join(", ")
            )]
        } else {
            Vec::new()
        }
    }
}

pub fn length_of_stay_points(days: u32) -> u32 {
    match days {
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 3,
        4..=6 => 4,
        7..=13 => 5,
        _ => 7,
    }
}

pub fn acuity_points(acuity: Acuity) -> u32 {
    match acuity {
        Acuity::Emergent => 3,
        Acuity::Urgent | Acuity::Elective => 0,
    }
}

pub fn comorbidity_points(charlson: u32) -> u32 {
    match charlson {
        0..=3 => charlson,
        _ => 5,
    }
}

pub fn ed_visit_points(visits: u32) -> u32 {
    visits.min(4)
}
