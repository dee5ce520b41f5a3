use vigil_core::models::risk_factors::PatientRiskFactors;
use vigil_core::models::risk_score::{RiskLevel, ScoreDirection};

use crate::RiskScorer;
use crate::error::ScoringError;
use crate::scale::{Band, Scale, ScaleRange};

/// Braden Scale. Six subscales, five rated 1–4 and friction/shear rated
/// 1–3, summed to 6–23. Lower is worse.
///
/// The five clinical bands collapse onto the four-level scale: mild and
/// no-significant risk both map to `Low`, the band label keeps them apart.
pub struct PressureUlcerRisk;

const REPOSITION: &str = "Reposition every 2 hours, pressure-redistribution mattress, nutrition consult";

pub static BRADEN: Scale<RiskLevel> = Scale {
    name: "Braden Scale",
    range: ScaleRange { min: 6, max: 23 },
    direction: ScoreDirection::LowerIsWorse,
    bands: &[
        Band {
            threshold: 9,
            level: RiskLevel::VeryHigh,
            label: "Very high risk",
            recommendations: &[
                REPOSITION,
                "Low-air-loss or alternating-pressure support surface",
                "Daily skin assessment by wound care nurse",
            ],
        },
        Band {
            threshold: 12,
            level: RiskLevel::High,
            label: "High risk",
            recommendations: &[
                REPOSITION,
                "Use 30-degree lateral inclination when repositioning",
            ],
        },
        Band {
            threshold: 14,
            level: RiskLevel::Moderate,
            label: "Moderate risk",
            recommendations: &[
                "Reposition on a turning schedule with foam wedges",
                "Manage moisture, nutrition, friction and shear",
            ],
        },
        Band {
            threshold: 18,
            level: RiskLevel::Low,
            label: "Mild risk",
            recommendations: &[
                "Establish turning schedule and maximise mobility",
                "Protect heels and manage moisture",
            ],
        },
        Band {
            threshold: 23,
            level: RiskLevel::Low,
            label: "No significant risk",
            recommendations: &["Routine skin assessment each shift"],
        },
    ],
};

impl RiskScorer for PressureUlcerRisk {
    fn id(&self) -> &str {
        "pressure_ulcer_risk"
    }

    fn name(&self) -> &str {
        "Braden Scale"
    }

    fn scale(&self) -> &Scale<RiskLevel> {
        &BRADEN
    }

    fn raw_score(&self, factors: &PatientRiskFactors) -> Result<u32, ScoringError> {
        let subscales = [
            ("sensoryPerception", factors.sensory_perception, 4),
            ("moisture", factors.moisture, 4),
            ("activity", factors.activity, 4),
            ("mobility", factors.mobility, 4),
            ("nutrition", factors.nutrition, 4),
            ("frictionShear", factors.friction_shear, 3),
        ];

        let mut total = 0;
        for (subscale, value, max) in subscales {
            if !(1..=max).contains(&value) {
                return Err(ScoringError::InvalidSubscale {
                    subscale: subscale.to_string(),
                    value,
                    min: 1,
                    max,
                });
            }
            total += u32::from(value);
        }
        Ok(total)
    }
}
