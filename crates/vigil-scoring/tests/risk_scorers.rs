mod common;

use common::{baseline_factors, with_braden};
use vigil_core::models::risk_factors::{
    Acuity, AmbulatoryAid, GaitTransfer, MorseMentalStatus, PatientRiskFactors,
};
use vigil_core::models::risk_score::RiskLevel;
use vigil_scoring::error::ScoringError;
use vigil_scoring::scorers::fall::FallRisk;
use vigil_scoring::scorers::pressure_ulcer::PressureUlcerRisk;
use vigil_scoring::scorers::readmission::{
    ReadmissionRisk, acuity_points, comorbidity_points, ed_visit_points, length_of_stay_points,
};
use vigil_scoring::{RiskScorer, all_scorers, get_scorer};

#[test]
fn morse_maximum_is_high_risk() {
    let factors = PatientRiskFactors {
        history_of_falling: true,
        secondary_diagnosis: true,
        ambulatory_aid: AmbulatoryAid::Furniture,
        iv_saline_lock: true,
        gait_transfer: GaitTransfer::Impaired,
        mental_status: MorseMentalStatus::ForgetsLimitations,
        ..baseline_factors()
    };
    let score = FallRisk.score(&factors).unwrap();
    assert_eq!(score.score, 125);
    assert_eq!(score.risk_level, RiskLevel::High);
    assert_eq!(
        score.recommendations[0],
        "Bed alarm, 1:1 supervision if available, hourly rounding"
    );
}

#[test]
fn morse_factor_weights() {
    let base = baseline_factors();
    let cases: Vec<(PatientRiskFactors, u32)> = vec![
        (PatientRiskFactors { history_of_falling: true, ..base.clone() }, 25),
        (PatientRiskFactors { secondary_diagnosis: true, ..base.clone() }, 15),
        (
            PatientRiskFactors { ambulatory_aid: AmbulatoryAid::CrutchesCaneWalker, ..base.clone() },
            15,
        ),
        (PatientRiskFactors { ambulatory_aid: AmbulatoryAid::Furniture, ..base.clone() }, 30),
        (PatientRiskFactors { iv_saline_lock: true, ..base.clone() }, 20),
        (PatientRiskFactors { gait_transfer: GaitTransfer::Weak, ..base.clone() }, 10),
        (PatientRiskFactors { gait_transfer: GaitTransfer::Impaired, ..base.clone() }, 20),
        (
            PatientRiskFactors {
                mental_status: MorseMentalStatus::ForgetsLimitations,
                ..base.clone()
            },
            15,
        ),
    ];
    for (factors, expected) in cases {
        assert_eq!(FallRisk.raw_score(&factors).unwrap(), expected);
    }
}

#[test]
fn morse_band_edges() {
    let moderate = PatientRiskFactors {
        history_of_falling: true,
        ..baseline_factors()
    };
    assert_eq!(FallRisk.score(&moderate).unwrap().risk_level, RiskLevel::Moderate);

    // 15 + 20 + 10 = 45
    let high = PatientRiskFactors {
        secondary_diagnosis: true,
        iv_saline_lock: true,
        gait_transfer: GaitTransfer::Weak,
        ..baseline_factors()
    };
    let score = FallRisk.score(&high).unwrap();
    assert_eq!(score.score, 45);
    assert_eq!(score.risk_level, RiskLevel::High);

    let low = FallRisk.score(&baseline_factors()).unwrap();
    assert_eq!(low.score, 0);
    assert_eq!(low.risk_level, RiskLevel::Low);
}

#[test]
fn older_patients_get_medication_review() {
    let factors = PatientRiskFactors {
        age: 78,
        history_of_falling: true,
        ..baseline_factors()
    };
    let score = FallRisk.score(&factors).unwrap();
    assert!(
        score
            .recommendations
            .last()
            .unwrap()
            .starts_with("Review medications")
    );

    let low_risk_elder = PatientRiskFactors {
        age: 78,
        ..baseline_factors()
    };
    let score = FallRisk.score(&low_risk_elder).unwrap();
    assert!(!score.recommendations.iter().any(|r| r.starts_with("Review medications")));
}

#[test]
fn implausible_age_is_rejected() {
    let factors = PatientRiskFactors {
        age: 131,
        ..baseline_factors()
    };
    assert!(matches!(
        FallRisk.score(&factors),
        Err(ScoringError::InvalidFactor { .. })
    ));
}

#[test]
fn lace_length_of_stay_table() {
    let cases = [
        (0, 0),
        (1, 1),
        (2, 2),
        (3, 3),
        (4, 4),
        (6, 4),
        (7, 5),
        (13, 5),
        (14, 7),
        (60, 7),
    ];
    for (days, points) in cases {
        assert_eq!(length_of_stay_points(days), points, "los {days}");
    }
}

#[test]
fn lace_acuity_is_two_tier() {
    assert_eq!(acuity_points(Acuity::Emergent), 3);
    assert_eq!(acuity_points(Acuity::Urgent), 0);
    assert_eq!(acuity_points(Acuity::Elective), 0);
}

#[test]
fn lace_comorbidity_and_ed_tables() {
    let charlson = [(0, 0), (1, 1), (2, 2), (3, 3), (4, 5), (9, 5)];
    for (value, points) in charlson {
        assert_eq!(comorbidity_points(value), points, "charlson {value}");
    }
    let visits = [(0, 0), (1, 1), (3, 3), (4, 4), (12, 4)];
    for (value, points) in visits {
        assert_eq!(ed_visit_points(value), points, "ed visits {value}");
    }
}

#[test]
fn lace_maximum_is_nineteen() {
    let factors = PatientRiskFactors {
        length_of_stay: 20,
        acuity: Acuity::Emergent,
        charlson_score: 6,
        ed_visits_6_months: 5,
        ..baseline_factors()
    };
    let score = ReadmissionRisk.score(&factors).unwrap();
    assert_eq!(score.score, 19);
    assert_eq!(score.risk_level, RiskLevel::High);
    assert!(
        score
            .recommendations
            .contains(&"Post-discharge follow-up within 48-72 hours".to_string())
    );
    assert!(score.recommendations.contains(&"Home health referral".to_string()));
}

#[test]
fn lace_bands() {
    // 4 (LOS 5) = low
    let low = PatientRiskFactors {
        length_of_stay: 5,
        ..baseline_factors()
    };
    assert_eq!(ReadmissionRisk.score(&low).unwrap().risk_level, RiskLevel::Low);

    // 4 + 1 = 5 moderate
    let moderate = PatientRiskFactors {
        length_of_stay: 5,
        ed_visits_6_months: 1,
        ..baseline_factors()
    };
    let score = ReadmissionRisk.score(&moderate).unwrap();
    assert_eq!(score.score, 5);
    assert_eq!(score.risk_level, RiskLevel::Moderate);

    // 5 + 3 + 2 = 10 high
    let high = PatientRiskFactors {
        length_of_stay: 7,
        acuity: Acuity::Emergent,
        charlson_score: 2,
        ..baseline_factors()
    };
    let score = ReadmissionRisk.score(&high).unwrap();
    assert_eq!(score.score, 10);
    assert_eq!(score.risk_level, RiskLevel::High);
}

#[test]
fn high_readmission_names_chronic_conditions() {
    let factors = PatientRiskFactors {
        length_of_stay: 14,
        acuity: Acuity::Emergent,
        has_chronic_conditions: vec!["Heart failure".to_string(), "COPD".to_string()],
        ..baseline_factors()
    };
    let score = ReadmissionRisk.score(&factors).unwrap();
    assert_eq!(
        score.recommendations.last().unwrap(),
        "Arrange disease-management follow-up for: Heart failure, COPD"
    );
}

#[test]
fn braden_maximum_is_no_significant_risk() {
    let score = PressureUlcerRisk.score(&baseline_factors()).unwrap();
    assert_eq!(score.score, 23);
    assert_eq!(score.min_score, Some(6));
    assert_eq!(score.risk_level, RiskLevel::Low);
    assert_eq!(score.band, "No significant risk");
}

#[test]
fn braden_minimum_is_very_high_risk() {
    let score = PressureUlcerRisk.score(&with_braden([1, 1, 1, 1, 1, 1])).unwrap();
    assert_eq!(score.score, 6);
    assert_eq!(score.risk_level, RiskLevel::VeryHigh);
    assert_eq!(
        score.recommendations[0],
        "Reposition every 2 hours, pressure-redistribution mattress, nutrition consult"
    );
}

#[test]
fn braden_mild_band() {
    let score = PressureUlcerRisk.score(&with_braden([3, 3, 3, 3, 3, 2])).unwrap();
    assert_eq!(score.score, 17);
    assert_eq!(score.risk_level, RiskLevel::Low);
    assert_eq!(score.band, "Mild risk");
}

#[test]
fn braden_subscale_out_of_range_is_rejected() {
    let friction = with_braden([4, 4, 4, 4, 4, 4]);
    match PressureUlcerRisk.score(&friction) {
        Err(ScoringError::InvalidSubscale {
            subscale,
            value,
            min,
            max,
        }) => {
            assert_eq!(subscale, "frictionShear");
            assert_eq!((value, min, max), (4, 1, 3));
        }
        other => panic!("expected InvalidSubscale, got {other:?}"),
    }

    let nutrition = with_braden([4, 4, 4, 4, 0, 3]);
    assert!(matches!(
        PressureUlcerRisk.score(&nutrition),
        Err(ScoringError::InvalidSubscale { .. })
    ));

    let sensory = with_braden([5, 4, 4, 4, 4, 3]);
    assert!(matches!(
        PressureUlcerRisk.score(&sensory),
        Err(ScoringError::InvalidSubscale { .. })
    ));
}

#[test]
fn registry_lists_all_scorers() {
    let ids: Vec<String> = all_scorers().iter().map(|s| s.id().to_string()).collect();
    assert_eq!(ids, ["fall_risk", "readmission_risk", "pressure_ulcer_risk"]);

    let braden = get_scorer("pressure_ulcer_risk").unwrap();
    assert_eq!(braden.name(), "Braden Scale");
    assert!(get_scorer("apache_ii").is_none());
}
