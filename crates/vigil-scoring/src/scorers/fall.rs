use vigil_core::models::risk_factors::{
    AmbulatoryAid, GaitTransfer, MorseMentalStatus, PatientRiskFactors,
};
use vigil_core::models::risk_score::{RiskLevel, RiskScore, ScoreDirection};

use crate::error::ScoringError;
use crate::scale::{Band, Scale, ScaleRange};
use crate::{RiskScorer, validate_age};

/// Morse Fall Scale. Six weighted factors, total 0–125.
/// 0–24 low, 25–44 moderate, 45+ high.
pub struct FallRisk;

pub static MORSE: Scale<RiskLevel> = Scale {
    name: "Morse Fall Scale",
    range: ScaleRange { min: 0, max: 125 },
    direction: ScoreDirection::HigherIsWorse,
    bands: &[
        Band {
            threshold: 0,
            level: RiskLevel::Low,
            label: "Low fall risk",
            recommendations: &[
                "Good basic nursing care; no additional fall intervention required",
            ],
        },
        Band {
            threshold: 25,
            level: RiskLevel::Moderate,
            label: "Moderate fall risk",
            recommendations: &[
                "Standard fall-prevention interventions",
                "Non-slip footwear, call light and personal items within reach",
            ],
        },
        Band {
            threshold: 45,
            level: RiskLevel::High,
            label: "High fall risk",
            recommendations: &[
                "Bed alarm, 1:1 supervision if available, hourly rounding",
                "Implement high-risk fall protocol",
                "Assist with all transfers and toileting",
            ],
        },
    ],
};

impl RiskScorer for FallRisk {
    fn id(&self) -> &str {
        "fall_risk"
    }

    fn name(&self) -> &str {
        "Morse Fall Scale"
    }

    fn scale(&self) -> &Scale<RiskLevel> {
        &MORSE
    }

    fn raw_score(&self, factors: &PatientRiskFactors) -> Result<u32, ScoringError> {
        validate_age(factors.age)?;
        Ok(morse_points(factors))
    }

    fn extra_recommendations(&self, factors: &PatientRiskFactors, score: &RiskScore) -> Vec<String> {
        if factors.age >= 65 && score.risk_level >= RiskLevel::Moderate {
            vec!["Review medications that increase fall risk (sedatives, antihypertensives)".to_string()]
        } else {
            Vec::new()
        }
    }
}

pub fn morse_points(factors: &PatientRiskFactors) -> u32 {
    let history = if factors.history_of_falling { 25 } else { 0 };
    let secondary = if factors.secondary_diagnosis { 15 } else { 0 };
    let aid = match factors.ambulatory_aid {
        AmbulatoryAid::None => 0,
        AmbulatoryAid::CrutchesCaneWalker => 15,
        AmbulatoryAid::Furniture => 30,
    };
    let iv = if factors.iv_saline_lock { 20 } else { 0 };
    let gait = match factors.gait_transfer {
        GaitTransfer::Normal => 0,
        GaitTransfer::Weak => 10,
        GaitTransfer::Impaired => 20,
    };
    let mental = match factors.mental_status {
        MorseMentalStatus::Oriented => 0,
        MorseMentalStatus::ForgetsLimitations => 15,
    };
    history + secondary + aid + iv + gait + mental
}
