//! Sepsis screening: qSOFA, SIRS and NEWS2.
//!
//! Missing vitals or labs never raise an error. A criterion whose input is
//! absent is recorded as unavailable and not met, so sparse input produces
//! a valid but possibly underestimated score. [`DataCompleteness`] and the
//! optional caveat on [`SepsisRiskResult`] surface that to the reader.

use vigil_core::config::EngineConfig;
use vigil_core::models::risk_score::ScoreDirection;
use vigil_core::models::sepsis::{
    Criterion, DataCompleteness, SepsisRiskLevel, SepsisRiskResult, SepsisScore,
};
use vigil_core::models::vitals::{LabsInput, MentalStatus, VitalsInput};

use crate::error::ScoringError;
use crate::scale::{Band, Scale, ScaleRange};

const SEPSIS_BUNDLE: &str = "Consider sepsis bundle, obtain lactate, blood cultures";
const SEPSIS_SOURCE: &str = "Evaluate for sepsis source";
const RAPID_RESPONSE: &str = "Escalate to rapid response / consider ICU";

pub static QSOFA: Scale<SepsisRiskLevel> = Scale {
    name: "qSOFA",
    range: ScaleRange { min: 0, max: 3 },
    direction: ScoreDirection::HigherIsWorse,
    bands: &[
        Band {
            threshold: 0,
            level: SepsisRiskLevel::Low,
            label: "qSOFA negative",
            recommendations: &["Reassess qSOFA if clinical status changes"],
        },
        Band {
            threshold: 2,
            level: SepsisRiskLevel::Moderate,
            label: "qSOFA positive: high risk of poor outcome",
            recommendations: &[SEPSIS_BUNDLE],
        },
        Band {
            threshold: 3,
            level: SepsisRiskLevel::High,
            label: "qSOFA positive: all criteria met",
            recommendations: &[SEPSIS_BUNDLE, "Assess for organ dysfunction with full SOFA"],
        },
    ],
};

pub static SIRS: Scale<SepsisRiskLevel> = Scale {
    name: "SIRS",
    range: ScaleRange { min: 0, max: 4 },
    direction: ScoreDirection::HigherIsWorse,
    bands: &[
        Band {
            threshold: 0,
            level: SepsisRiskLevel::Low,
            label: "SIRS negative",
            recommendations: &[],
        },
        Band {
            threshold: 2,
            level: SepsisRiskLevel::Moderate,
            label: "SIRS positive",
            recommendations: &[SEPSIS_SOURCE],
        },
        Band {
            threshold: 3,
            level: SepsisRiskLevel::High,
            label: "SIRS positive: three or more criteria",
            recommendations: &[SEPSIS_SOURCE, "Obtain CBC with differential and blood cultures"],
        },
    ],
};

pub static NEWS2: Scale<SepsisRiskLevel> = Scale {
    name: "NEWS2",
    range: ScaleRange { min: 0, max: 20 },
    direction: ScoreDirection::HigherIsWorse,
    bands: &[
        Band {
            threshold: 0,
            level: SepsisRiskLevel::Low,
            label: "Low clinical risk",
            recommendations: &["Continue routine observations"],
        },
        Band {
            threshold: 5,
            level: SepsisRiskLevel::Moderate,
            label: "Medium clinical risk: urgent review",
            recommendations: &[
                "Urgent review by a clinician competent in acute illness",
                "Increase observations to at least hourly",
            ],
        },
        Band {
            threshold: 7,
            level: SepsisRiskLevel::High,
            label: "High clinical risk: emergency response",
            recommendations: &[RAPID_RESPONSE, "Continuous monitoring of vital signs"],
        },
    ],
};

/// Run all three screens and roll them up.
///
/// Overall risk is the worst sub-score level, escalated to `Critical` when
/// qSOFA and SIRS are both positive (each >= 2).
pub fn assess_sepsis(
    patient_id: &str,
    vitals: &VitalsInput,
    labs: &LabsInput,
    config: &EngineConfig,
) -> Result<SepsisRiskResult, ScoringError> {
    config.validate()?;

    let qsofa = qsofa(vitals)?;
    let sirs = sirs(vitals, labs)?;
    let news2 = news2(vitals)?;

    let both_positive = qsofa.score >= 2 && sirs.score >= 2;
    let overall_risk = if both_positive {
        SepsisRiskLevel::Critical
    } else {
        qsofa.risk_level.max(sirs.risk_level).max(news2.risk_level)
    };

    let mut recommendations = Vec::new();
    if both_positive {
        recommendations
            .push("Activate sepsis pathway: qSOFA and SIRS both positive".to_string());
    }
    for line in qsofa
        .recommendations
        .iter()
        .chain(&sirs.recommendations)
        .chain(&news2.recommendations)
        .cloned()
        .chain(lactate_recommendations(labs))
    {
        if !recommendations.contains(&line) {
            recommendations.push(line);
        }
    }

    let data_completeness = completeness(vitals, labs);
    let caveat = (data_completeness.fraction < config.completeness_warning_threshold).then(|| {
        format!(
            "Scores computed from partial data ({}/{} inputs); missing: {}. \
             Missing criteria were counted as not met, so risk may be underestimated.",
            data_completeness.available,
            data_completeness.expected,
            data_completeness.missing.join(", ")
        )
    });

    tracing::debug!(
        qsofa = qsofa.score,
        sirs = sirs.score,
        news2 = news2.score,
        overall = ?overall_risk,
        completeness = data_completeness.fraction,
        "sepsis risk computed"
    );

    Ok(SepsisRiskResult {
        patient_id: patient_id.to_string(),
        qsofa,
        sirs,
        news2,
        overall_risk,
        recommendations,
        data_completeness,
        caveat,
    })
}

/// qSOFA: one point each for RR >= 22, altered mentation, SBP <= 100.
pub fn qsofa(vitals: &VitalsInput) -> Result<SepsisScore, ScoringError> {
    validate_vitals(vitals)?;

    let criteria = vec![
        flag(
            "respiratory_rate",
            "Respiratory rate >= 22/min",
            vitals.respiratory_rate.map(|rr| rr >= 22.0),
        ),
        flag(
            "altered_mentation",
            "Altered mental status",
            vitals.mental_status.map(|m| m == MentalStatus::Altered),
        ),
        flag(
            "systolic_bp",
            "Systolic BP <= 100 mmHg",
            vitals.systolic_bp.map(|sbp| sbp <= 100.0),
        ),
    ];
    build(&QSOFA, criteria, Vec::new())
}

/// SIRS: temperature, heart rate, respiratory rate and white count.
pub fn sirs(vitals: &VitalsInput, labs: &LabsInput) -> Result<SepsisScore, ScoringError> {
    validate_vitals(vitals)?;
    validate_labs(labs)?;

    let criteria = vec![
        flag(
            "temperature",
            "Temperature > 100.4°F or < 96.8°F",
            vitals.temperature.map(|t| !(96.8..=100.4).contains(&t)),
        ),
        flag(
            "heart_rate",
            "Heart rate > 90 bpm",
            vitals.heart_rate.map(|hr| hr > 90.0),
        ),
        flag(
            "respiratory_rate",
            "Respiratory rate > 20/min",
            vitals.respiratory_rate.map(|rr| rr > 20.0),
        ),
        flag(
            "wbc",
            "WBC > 12 or < 4 x10³/µL",
            labs.wbc.map(|wbc| !(4.0..=12.0).contains(&wbc)),
        ),
    ];
    build(&SIRS, criteria, Vec::new())
}

/// NEWS2 aggregate over seven parameters, each banded 0–3 (supplemental
/// oxygen 0 or 2). Oxygen saturation uses SpO2 scale 1.
pub fn news2(vitals: &VitalsInput) -> Result<SepsisScore, ScoringError> {
    validate_vitals(vitals)?;

    let criteria = vec![
        parameter(
            "respiratory_rate",
            "Respiratory rate",
            vitals.respiratory_rate.map(news2_respiratory_rate),
        ),
        parameter(
            "oxygen_saturation",
            "Oxygen saturation (scale 1)",
            vitals.oxygen_saturation.map(news2_oxygen_saturation),
        ),
        parameter(
            "supplemental_oxygen",
            "Supplemental oxygen",
            vitals.supplemental_oxygen.map(|on| if on { 2 } else { 0 }),
        ),
        parameter(
            "systolic_bp",
            "Systolic BP",
            vitals.systolic_bp.map(news2_systolic_bp),
        ),
        parameter(
            "heart_rate",
            "Heart rate",
            vitals.heart_rate.map(news2_heart_rate),
        ),
        parameter(
            "consciousness",
            "Consciousness (new confusion or altered)",
            vitals.mental_status.map(|m| match m {
                MentalStatus::Alert => 0,
                MentalStatus::Altered => 3,
            }),
        ),
        parameter(
            "temperature",
            "Temperature",
            vitals.temperature.map(news2_temperature),
        ),
    ];

    let mut extra = Vec::new();
    if criteria.iter().any(|c| c.points == 3) {
        extra.push("Single red parameter: urgent ward-based clinical review".to_string());
    }
    build(&NEWS2, criteria, extra)
}

pub fn news2_respiratory_rate(rr: f64) -> u32 {
    if rr <= 8.0 {
        3
    } else if rr <= 11.0 {
        1
    } else if rr <= 20.0 {
        0
    } else if rr <= 24.0 {
        2
    } else {
        3
    }
}

pub fn news2_oxygen_saturation(spo2: f64) -> u32 {
    if spo2 <= 91.0 {
        3
    } else if spo2 <= 93.0 {
        2
    } else if spo2 <= 95.0 {
        1
    } else {
        0
    }
}

pub fn news2_systolic_bp(sbp: f64) -> u32 {
    if sbp <= 90.0 {
        3
    } else if sbp <= 100.0 {
        2
    } else if sbp <= 110.0 {
        1
    } else if sbp < 220.0 {
        0
    } else {
        3
    }
}

pub fn news2_heart_rate(hr: f64) -> u32 {
    if hr <= 40.0 {
        3
    } else if hr <= 50.0 {
        1
    } else if hr <= 90.0 {
        0
    } else if hr <= 110.0 {
        1
    } else if hr <= 130.0 {
        2
    } else {
        3
    }
}

/// Input in °F; banded in °C rounded to one decimal.
pub fn news2_temperature(fahrenheit: f64) -> u32 {
    let celsius = ((fahrenheit - 32.0) * 5.0 / 9.0 * 10.0).round() / 10.0;
    if celsius <= 35.0 {
        3
    } else if celsius <= 36.0 {
        1
    } else if celsius <= 38.0 {
        0
    } else if celsius <= 39.0 {
        1
    } else {
        2
    }
}

fn flag(id: &str, description: &str, met: Option<bool>) -> Criterion {
    let met_flag = met.unwrap_or(false);
    Criterion {
        id: id.to_string(),
        description: description.to_string(),
        met: met_flag,
        points: u32::from(met_flag),
        available: met.is_some(),
    }
}

fn parameter(id: &str, description: &str, points: Option<u32>) -> Criterion {
    let points_value = points.unwrap_or(0);
    Criterion {
        id: id.to_string(),
        description: description.to_string(),
        met: points_value > 0,
        points: points_value,
        available: points.is_some(),
    }
}

fn build(
    scale: &Scale<SepsisRiskLevel>,
    criteria: Vec<Criterion>,
    extra: Vec<String>,
) -> Result<SepsisScore, ScoringError> {
    let score = criteria.iter().map(|c| c.points).sum();
    let band = scale.bandify(score)?;
    let mut recommendations: Vec<String> =
        band.recommendations.iter().map(|r| r.to_string()).collect();
    recommendations.extend(extra);

    Ok(SepsisScore {
        name: scale.name.to_string(),
        score,
        max_score: scale.range.max,
        risk_level: band.level,
        band: band.label.to_string(),
        interpretation: scale.interpretation(score, band),
        criteria,
        recommendations,
    })
}

fn lactate_recommendations(labs: &LabsInput) -> Vec<String> {
    match labs.lactate {
        Some(lactate) if lactate >= 4.0 => vec![
            "Lactate >= 4 mmol/L: initiate 30 mL/kg crystalloid resuscitation".to_string(),
            "Lactate elevated: repeat within 2-4 hours and assess perfusion".to_string(),
        ],
        Some(lactate) if lactate >= 2.0 => {
            vec!["Lactate elevated: repeat within 2-4 hours and assess perfusion".to_string()]
        }
        _ => Vec::new(),
    }
}

fn completeness(vitals: &VitalsInput, labs: &LabsInput) -> DataCompleteness {
    let inputs = [
        ("respiratoryRate", vitals.respiratory_rate.is_some()),
        ("systolicBP", vitals.systolic_bp.is_some()),
        ("heartRate", vitals.heart_rate.is_some()),
        ("temperature", vitals.temperature.is_some()),
        ("oxygenSaturation", vitals.oxygen_saturation.is_some()),
        ("mentalStatus", vitals.mental_status.is_some()),
        ("supplementalOxygen", vitals.supplemental_oxygen.is_some()),
        ("wbc", labs.wbc.is_some()),
        ("lactate", labs.lactate.is_some()),
    ];

    let missing: Vec<String> = inputs
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name.to_string())
        .collect();
    let expected = inputs.len() as u32;
    let available = expected - missing.len() as u32;

    DataCompleteness {
        available,
        expected,
        fraction: f64::from(available) / f64::from(expected),
        missing,
    }
}

fn validate_vitals(vitals: &VitalsInput) -> Result<(), ScoringError> {
    let fields = [
        ("heartRate", vitals.heart_rate),
        ("systolicBP", vitals.systolic_bp),
        ("diastolicBP", vitals.diastolic_bp),
        ("respiratoryRate", vitals.respiratory_rate),
        ("temperature", vitals.temperature),
        ("oxygenSaturation", vitals.oxygen_saturation),
    ];
    for (field, value) in fields {
        if let Some(v) = value
            && (!v.is_finite() || v < 0.0)
        {
            return Err(ScoringError::InvalidVital {
                field: field.to_string(),
                value: v,
            });
        }
    }
    if let Some(spo2) = vitals.oxygen_saturation
        && spo2 > 100.0
    {
        return Err(ScoringError::InvalidVital {
            field: "oxygenSaturation".to_string(),
            value: spo2,
        });
    }
    Ok(())
}

fn validate_labs(labs: &LabsInput) -> Result<(), ScoringError> {
    for (field, value) in [("wbc", labs.wbc), ("lactate", labs.lactate)] {
        if let Some(v) = value
            && (!v.is_finite() || v < 0.0)
        {
            return Err(ScoringError::InvalidLab {
                field: field.to_string(),
                value: v,
            });
        }
    }
    Ok(())
}
