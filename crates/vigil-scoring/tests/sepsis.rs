use vigil_core::config::EngineConfig;
use vigil_core::models::sepsis::SepsisRiskLevel;
use vigil_core::models::vitals::{LabsInput, MentalStatus, VitalsInput};
use vigil_scoring::error::ScoringError;
use vigil_scoring::sepsis::{
    assess_sepsis, news2, news2_heart_rate, news2_oxygen_saturation, news2_respiratory_rate,
    news2_systolic_bp, news2_temperature, qsofa, sirs,
};

fn full_normal_vitals() -> VitalsInput {
    VitalsInput {
        heart_rate: Some(72.0),
        systolic_bp: Some(122.0),
        diastolic_bp: Some(78.0),
        respiratory_rate: Some(16.0),
        temperature: Some(98.6),
        oxygen_saturation: Some(98.0),
        mental_status: Some(MentalStatus::Alert),
        supplemental_oxygen: Some(false),
    }
}

fn normal_labs() -> LabsInput {
    LabsInput {
        wbc: Some(7.5),
        lactate: Some(1.1),
    }
}

#[test]
fn qsofa_all_three_criteria() {
    let vitals = VitalsInput {
        respiratory_rate: Some(24.0),
        systolic_bp: Some(95.0),
        mental_status: Some(MentalStatus::Altered),
        ..Default::default()
    };
    let score = qsofa(&vitals).unwrap();
    assert_eq!(score.score, 3);
    assert_eq!(score.max_score, 3);
    assert_eq!(score.risk_level, SepsisRiskLevel::High);
    assert!(score.criteria.iter().all(|c| c.met && c.available));
}

#[test]
fn qsofa_thresholds_are_inclusive() {
    let at_threshold = VitalsInput {
        respiratory_rate: Some(22.0),
        systolic_bp: Some(100.0),
        ..Default::default()
    };
    let score = qsofa(&at_threshold).unwrap();
    assert_eq!(score.score, 2);
    assert_eq!(score.risk_level, SepsisRiskLevel::Moderate);
    assert!(
        score
            .recommendations
            .contains(&"Consider sepsis bundle, obtain lactate, blood cultures".to_string())
    );

    let just_inside = VitalsInput {
        respiratory_rate: Some(21.9),
        systolic_bp: Some(100.1),
        ..Default::default()
    };
    assert_eq!(qsofa(&just_inside).unwrap().score, 0);
}

#[test]
fn missing_vitals_count_as_not_met() {
    let score = qsofa(&VitalsInput::default()).unwrap();
    assert_eq!(score.score, 0);
    assert_eq!(score.risk_level, SepsisRiskLevel::Low);
    assert!(score.criteria.iter().all(|c| !c.met && !c.available));
}

#[test]
fn sirs_thresholds_are_strict() {
    let borderline = VitalsInput {
        temperature: Some(100.4),
        heart_rate: Some(90.0),
        respiratory_rate: Some(20.0),
        ..Default::default()
    };
    let labs = LabsInput {
        wbc: Some(12.0),
        lactate: None,
    };
    assert_eq!(sirs(&borderline, &labs).unwrap().score, 0);

    let low_side = VitalsInput {
        temperature: Some(96.8),
        ..Default::default()
    };
    let low_wbc = LabsInput {
        wbc: Some(4.0),
        lactate: None,
    };
    assert_eq!(sirs(&low_side, &low_wbc).unwrap().score, 0);

    let positive = VitalsInput {
        temperature: Some(96.7),
        heart_rate: Some(91.0),
        respiratory_rate: Some(21.0),
        ..Default::default()
    };
    let high_wbc = LabsInput {
        wbc: Some(3.9),
        lactate: None,
    };
    let score = sirs(&positive, &high_wbc).unwrap();
    assert_eq!(score.score, 4);
    assert_eq!(score.risk_level, SepsisRiskLevel::High);
    assert!(score.recommendations.contains(&"Evaluate for sepsis source".to_string()));
}

#[test]
fn sirs_reports_each_criterion() {
    let vitals = VitalsInput {
        heart_rate: Some(110.0),
        ..Default::default()
    };
    let score = sirs(&vitals, &LabsInput::default()).unwrap();
    assert_eq!(score.score, 1);
    assert!(score.criterion("heart_rate").unwrap().met);
    assert!(!score.criterion("wbc").unwrap().available);
    assert!(!score.criterion("temperature").unwrap().met);
}

#[test]
fn news2_respiratory_rate_table() {
    let cases = [
        (8.0, 3),
        (9.0, 1),
        (11.0, 1),
        (12.0, 0),
        (20.0, 0),
        (21.0, 2),
        (24.0, 2),
        (25.0, 3),
    ];
    for (rr, points) in cases {
        assert_eq!(news2_respiratory_rate(rr), points, "rr {rr}");
    }
}

#[test]
fn news2_oxygen_saturation_table() {
    let cases = [(91.0, 3), (92.0, 2), (93.0, 2), (94.0, 1), (95.0, 1), (96.0, 0), (100.0, 0)];
    for (spo2, points) in cases {
        assert_eq!(news2_oxygen_saturation(spo2), points, "spo2 {spo2}");
    }
}

#[test]
fn news2_systolic_bp_table() {
    let cases = [
        (90.0, 3),
        (91.0, 2),
        (100.0, 2),
        (101.0, 1),
        (110.0, 1),
        (111.0, 0),
        (219.0, 0),
        (220.0, 3),
    ];
    for (sbp, points) in cases {
        assert_eq!(news2_systolic_bp(sbp), points, "sbp {sbp}");
    }
}

#[test]
fn news2_heart_rate_table() {
    let cases = [
        (40.0, 3),
        (41.0, 1),
        (50.0, 1),
        (51.0, 0),
        (90.0, 0),
        (91.0, 1),
        (110.0, 1),
        (111.0, 2),
        (130.0, 2),
        (131.0, 3),
    ];
    for (hr, points) in cases {
        assert_eq!(news2_heart_rate(hr), points, "hr {hr}");
    }
}

#[test]
fn news2_temperature_table_in_fahrenheit() {
    let cases = [
        (95.0, 3),  // 35.0 °C
        (96.8, 1),  // 36.0 °C
        (97.0, 0),  // 36.1 °C
        (100.4, 0), // 38.0 °C
        (100.6, 1), // 38.1 °C
        (102.2, 1), // 39.0 °C
        (102.4, 2), // 39.1 °C
    ];
    for (temp, points) in cases {
        assert_eq!(news2_temperature(temp), points, "temp {temp}");
    }
}

#[test]
fn news2_maximum_is_twenty() {
    let vitals = VitalsInput {
        heart_rate: Some(140.0),
        systolic_bp: Some(80.0),
        diastolic_bp: None,
        respiratory_rate: Some(30.0),
        temperature: Some(94.0),
        oxygen_saturation: Some(85.0),
        mental_status: Some(MentalStatus::Altered),
        supplemental_oxygen: Some(true),
    };
    let score = news2(&vitals).unwrap();
    assert_eq!(score.score, 20);
    assert_eq!(score.max_score, 20);
    assert_eq!(score.risk_level, SepsisRiskLevel::High);
    assert!(
        score
            .recommendations
            .contains(&"Escalate to rapid response / consider ICU".to_string())
    );
}

#[test]
fn news2_bands() {
    let normal = news2(&full_normal_vitals()).unwrap();
    assert_eq!(normal.score, 0);
    assert_eq!(normal.risk_level, SepsisRiskLevel::Low);

    // RR 22 (2) + HR 115 (2) + temp 38.3 °C (1) = 5
    let medium = VitalsInput {
        respiratory_rate: Some(22.0),
        heart_rate: Some(115.0),
        temperature: Some(101.0),
        ..full_normal_vitals()
    };
    let score = news2(&medium).unwrap();
    assert_eq!(score.score, 5);
    assert_eq!(score.risk_level, SepsisRiskLevel::Moderate);

    // + supplemental oxygen (2) = 7
    let high = VitalsInput {
        supplemental_oxygen: Some(true),
        ..medium
    };
    let score = news2(&high).unwrap();
    assert_eq!(score.score, 7);
    assert_eq!(score.risk_level, SepsisRiskLevel::High);
}

#[test]
fn news2_single_red_parameter_is_flagged() {
    let vitals = VitalsInput {
        mental_status: Some(MentalStatus::Altered),
        ..full_normal_vitals()
    };
    let score = news2(&vitals).unwrap();
    assert_eq!(score.score, 3);
    assert_eq!(score.risk_level, SepsisRiskLevel::Low);
    assert!(
        score
            .recommendations
            .iter()
            .any(|r| r.starts_with("Single red parameter"))
    );
}

#[test]
fn critical_when_qsofa_and_sirs_both_positive() {
    // qSOFA: RR 22, SBP 100. SIRS: RR > 20, HR 95.
    let vitals = VitalsInput {
        respiratory_rate: Some(22.0),
        systolic_bp: Some(100.0),
        heart_rate: Some(95.0),
        ..Default::default()
    };
    let result =
        assess_sepsis("pt-1", &vitals, &LabsInput::default(), &EngineConfig::default()).unwrap();
    assert_eq!(result.qsofa.score, 2);
    assert_eq!(result.sirs.score, 2);
    assert_eq!(result.overall_risk, SepsisRiskLevel::Critical);
    assert_eq!(
        result.recommendations[0],
        "Activate sepsis pathway: qSOFA and SIRS both positive"
    );
    assert!(
        result
            .recommendations
            .contains(&"Consider sepsis bundle, obtain lactate, blood cultures".to_string())
    );
    assert!(result.recommendations.contains(&"Evaluate for sepsis source".to_string()));
}

#[test]
fn not_critical_when_only_qsofa_positive() {
    let vitals = VitalsInput {
        respiratory_rate: Some(22.0),
        systolic_bp: Some(100.0),
        heart_rate: Some(80.0),
        temperature: Some(98.6),
        ..Default::default()
    };
    let result =
        assess_sepsis("pt-1", &vitals, &LabsInput::default(), &EngineConfig::default()).unwrap();
    assert_eq!(result.qsofa.score, 2);
    assert_eq!(result.sirs.score, 1);
    assert_eq!(result.overall_risk, SepsisRiskLevel::Moderate);
}

#[test]
fn not_critical_when_only_sirs_positive() {
    let vitals = VitalsInput {
        temperature: Some(101.5),
        heart_rate: Some(120.0),
        respiratory_rate: Some(21.0),
        ..Default::default()
    };
    let labs = LabsInput {
        wbc: Some(15.0),
        lactate: None,
    };
    let result = assess_sepsis("pt-1", &vitals, &labs, &EngineConfig::default()).unwrap();
    assert_eq!(result.qsofa.score, 0);
    assert_eq!(result.sirs.score, 4);
    assert_eq!(result.overall_risk, SepsisRiskLevel::High);
}

#[test]
fn empty_input_still_returns_result_with_caveat() {
    let result = assess_sepsis(
        "pt-1",
        &VitalsInput::default(),
        &LabsInput::default(),
        &EngineConfig::default(),
    )
    .unwrap();
    assert_eq!(result.overall_risk, SepsisRiskLevel::Low);
    assert_eq!(result.data_completeness.available, 0);
    assert_eq!(result.data_completeness.expected, 9);
    assert_eq!(result.data_completeness.fraction, 0.0);
    assert_eq!(result.data_completeness.missing.len(), 9);
    let caveat = result.caveat.unwrap();
    assert!(caveat.contains("0/9"));
    assert!(caveat.contains("respiratoryRate"));
}

#[test]
fn complete_input_has_no_caveat() {
    let result = assess_sepsis(
        "pt-1",
        &full_normal_vitals(),
        &normal_labs(),
        &EngineConfig::default(),
    )
    .unwrap();
    assert_eq!(result.data_completeness.available, 9);
    assert!(result.data_completeness.missing.is_empty());
    assert!(result.caveat.is_none());
    assert_eq!(result.overall_risk, SepsisRiskLevel::Low);
}

#[test]
fn elevated_lactate_adds_recommendations() {
    let labs = LabsInput {
        wbc: None,
        lactate: Some(4.5),
    };
    let result =
        assess_sepsis("pt-1", &full_normal_vitals(), &labs, &EngineConfig::default()).unwrap();
    assert!(result.recommendations.iter().any(|r| r.contains("crystalloid")));
    assert!(result.recommendations.iter().any(|r| r.starts_with("Lactate elevated")));

    let mild = LabsInput {
        wbc: None,
        lactate: Some(2.0),
    };
    let result =
        assess_sepsis("pt-1", &full_normal_vitals(), &mild, &EngineConfig::default()).unwrap();
    assert!(!result.recommendations.iter().any(|r| r.contains("crystalloid")));
    assert!(result.recommendations.iter().any(|r| r.starts_with("Lactate elevated")));
}

#[test]
fn invalid_vitals_are_rejected() {
    let negative = VitalsInput {
        heart_rate: Some(-5.0),
        ..Default::default()
    };
    assert!(matches!(
        qsofa(&negative),
        Err(ScoringError::InvalidVital { ref field, .. }) if field == "heartRate"
    ));

    let saturation = VitalsInput {
        oxygen_saturation: Some(101.0),
        ..Default::default()
    };
    assert!(matches!(news2(&saturation), Err(ScoringError::InvalidVital { .. })));

    let nan = VitalsInput {
        temperature: Some(f64::NAN),
        ..Default::default()
    };
    assert!(matches!(
        assess_sepsis("pt-1", &nan, &LabsInput::default(), &EngineConfig::default()),
        Err(ScoringError::InvalidVital { .. })
    ));
}

#[test]
fn invalid_labs_are_rejected() {
    let labs = LabsInput {
        wbc: Some(f64::INFINITY),
        lactate: None,
    };
    assert!(matches!(
        sirs(&VitalsInput::default(), &labs),
        Err(ScoringError::InvalidLab { .. })
    ));
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let vitals = VitalsInput {
        respiratory_rate: Some(24.0),
        systolic_bp: Some(95.0),
        mental_status: Some(MentalStatus::Altered),
        heart_rate: Some(120.0),
        ..Default::default()
    };
    let result =
        assess_sepsis("pt-42", &vitals, &LabsInput::default(), &EngineConfig::default()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["patientId"], "pt-42");
    assert_eq!(json["overallRisk"], "critical");
    assert_eq!(json["qsofa"]["riskLevel"], "high");
    assert_eq!(json["qsofa"]["maxScore"], 3);
    assert_eq!(json["dataCompleteness"]["expected"], 9);
    assert!(json["qsofa"]["criteria"][0]["met"].as_bool().unwrap());
}

#[test]
fn repeated_calls_are_identical() {
    let vitals = full_normal_vitals();
    let labs = normal_labs();
    let config = EngineConfig::default();
    let first = assess_sepsis("pt-1", &vitals, &labs, &config).unwrap();
    let second = assess_sepsis("pt-1", &vitals, &labs, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn vitals_use_capitalised_bp_keys() {
    let vitals: VitalsInput = serde_json::from_str(
        r#"{"respiratoryRate": 24, "systolicBP": 95, "mentalStatus": "altered"}"#,
    )
    .unwrap();
    assert_eq!(vitals.systolic_bp, Some(95.0));

    let score = qsofa(&vitals).unwrap();
    assert_eq!(score.score, 3);
    assert_eq!(score.risk_level, SepsisRiskLevel::High);

    let json = serde_json::to_value(&full_normal_vitals()).unwrap();
    assert_eq!(json["systolicBP"], 122.0);
    assert_eq!(json["diastolicBP"], 78.0);
    assert!(json.get("systolicBp").is_none());
}
