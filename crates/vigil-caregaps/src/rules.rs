//! The preventive care measure table.
//!
//! Age bounds are inclusive. `interval_days: None` marks a one-time measure
//! that any evidence satisfies. `keywords` are searched in procedures and
//! immunizations; `date_keys` are looked up in `lastLabDates`.

use serde::Serialize;
use vigil_core::models::care_gap::{CareGapCategory, Gender};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareGapRule {
    pub measure_id: &'static str,
    pub title: &'static str,
    pub category: CareGapCategory,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub gender: Option<Gender>,
    pub trigger: Trigger,
    pub interval_days: Option<i64>,
    pub keywords: &'static [&'static str],
    pub date_keys: &'static [&'static str],
}

/// Extra applicability condition on top of the age and gender bounds.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    Always,
    /// Any listed condition appears in the problem list.
    AnyCondition { conditions: &'static [&'static str] },
    /// Reached `min_age`, or any listed condition appears.
    AgeOrCondition {
        min_age: u32,
        conditions: &'static [&'static str],
    },
}

const TOBACCO: &[&str] = &["smoker", "smoking", "tobacco", "nicotine dependence", "cigarette"];
const DIABETES: &[&str] = &["diabetes", "diabetic", "t2dm", "t1dm"];
/// Chronic lung disease or diabetes.
const PNEUMOCOCCAL_RISK: &[&str] = &[
    "copd",
    "asthma",
    "emphysema",
    "chronic bronchitis",
    "chronic lung disease",
    "interstitial lung disease",
    "diabetes",
    "diabetic",
];
const CARDIOMETABOLIC: &[&str] = &[
    "coronary artery disease",
    "cad",
    "ischemic heart disease",
    "myocardial infarction",
    "diabetes",
    "diabetic",
    "hyperlipidemia",
    "hypercholesterolemia",
    "dyslipidemia",
    "statin",
];
const KIDNEY_RISK: &[&str] = &[
    "diabetes",
    "diabetic",
    "chronic kidney disease",
    "ckd",
];
const HYPERTENSION: &[&str] = &["hypertension", "hypertensive", "htn"];

pub static RULES: &[CareGapRule] = &[
    CareGapRule {
        measure_id: "colorectal_cancer_screening",
        title: "Colorectal cancer screening",
        category: CareGapCategory::Screening,
        min_age: Some(45),
        max_age: Some(75),
        gender: None,
        trigger: Trigger::Always,
        interval_days: Some(3650),
        keywords: &[
            "colonoscopy",
            "fit",
            "fecal immunochemical test",
            "cologuard",
            "sigmoidoscopy",
            "ct colonography",
        ],
        date_keys: &["colonoscopy", "colorectal_screening"],
    },
    CareGapRule {
        measure_id: "breast_cancer_screening",
        title: "Breast cancer screening (mammogram)",
        category: CareGapCategory::Screening,
        min_age: Some(40),
        max_age: Some(74),
        gender: Some(Gender::Female),
        trigger: Trigger::Always,
        interval_days: Some(730),
        keywords: &["mammogram", "mammography"],
        date_keys: &["mammogram"],
    },
    CareGapRule {
        measure_id: "cervical_cancer_screening",
        title: "Cervical cancer screening",
        category: CareGapCategory::Screening,
        min_age: Some(21),
        max_age: Some(65),
        gender: Some(Gender::Female),
        trigger: Trigger::Always,
        interval_days: Some(1095),
        keywords: &["pap smear", "pap test", "cervical cytology", "hpv test"],
        date_keys: &["pap_smear", "hpv_test"],
    },
    CareGapRule {
        measure_id: "prostate_cancer_screening",
        title: "Prostate cancer screening discussion (PSA)",
        category: CareGapCategory::Screening,
        min_age: Some(55),
        max_age: Some(69),
        gender: Some(Gender::Male),
        trigger: Trigger::Always,
        interval_days: Some(730),
        keywords: &["psa", "prostate specific antigen"],
        date_keys: &["psa"],
    },
    CareGapRule {
        measure_id: "lung_cancer_screening",
        title: "Lung cancer screening (low-dose CT)",
        category: CareGapCategory::Screening,
        min_age: Some(50),
        max_age: Some(80),
        gender: None,
        trigger: Trigger::AnyCondition {
            conditions: TOBACCO,
        },
        interval_days: Some(365),
        keywords: &["low-dose ct", "ldct", "lung cancer screening"],
        date_keys: &["ldct"],
    },
    CareGapRule {
        measure_id: "aaa_screening",
        title: "Abdominal aortic aneurysm screening",
        category: CareGapCategory::Screening,
        min_age: Some(65),
        max_age: Some(75),
        gender: Some(Gender::Male),
        trigger: Trigger::AnyCondition {
            conditions: TOBACCO,
        },
        interval_days: None,
        keywords: &["aaa ultrasound", "aortic ultrasound", "abdominal aortic aneurysm screening"],
        date_keys: &["aaa_ultrasound"],
    },
    CareGapRule {
        measure_id: "osteoporosis_screening",
        title: "Osteoporosis screening (DXA)",
        category: CareGapCategory::Screening,
        min_age: Some(65),
        max_age: None,
        gender: Some(Gender::Female),
        trigger: Trigger::Always,
        interval_days: Some(730),
        keywords: &["dxa", "dexa", "bone density"],
        date_keys: &["dxa"],
    },
    CareGapRule {
        measure_id: "influenza_vaccine",
        title: "Influenza vaccine",
        category: CareGapCategory::Immunization,
        min_age: None,
        max_age: None,
        gender: None,
        trigger: Trigger::Always,
        interval_days: Some(365),
        keywords: &["influenza", "flu"],
        date_keys: &["influenza_vaccine"],
    },
    CareGapRule {
        measure_id: "pneumococcal_vaccine",
        title: "Pneumococcal vaccine",
        category: CareGapCategory::Immunization,
        min_age: None,
        max_age: None,
        gender: None,
        trigger: Trigger::AgeOrCondition {
            min_age: 65,
            conditions: PNEUMOCOCCAL_RISK,
        },
        interval_days: None,
        keywords: &[
            "pneumococcal",
            "pcv13",
            "pcv15",
            "pcv20",
            "ppsv23",
            "prevnar",
            "pneumovax",
        ],
        date_keys: &["pneumococcal_vaccine"],
    },
    CareGapRule {
        measure_id: "zoster_vaccine",
        title: "Shingles (zoster) vaccine",
        category: CareGapCategory::Immunization,
        min_age: Some(50),
        max_age: None,
        gender: None,
        trigger: Trigger::Always,
        interval_days: None,
        keywords: &["zoster", "shingrix", "shingles"],
        date_keys: &["zoster_vaccine"],
    },
    CareGapRule {
        measure_id: "td_tdap_booster",
        title: "Td/Tdap booster",
        category: CareGapCategory::Immunization,
        min_age: Some(19),
        max_age: None,
        gender: None,
        trigger: Trigger::Always,
        interval_days: Some(3650),
        keywords: &["tdap", "td", "tetanus"],
        date_keys: &["tdap"],
    },
    CareGapRule {
        measure_id: "mmr_vaccine",
        title: "MMR vaccine (childhood series)",
        category: CareGapCategory::Immunization,
        min_age: Some(1),
        max_age: Some(18),
        gender: None,
        trigger: Trigger::Always,
        interval_days: None,
        keywords: &["mmr", "measles"],
        date_keys: &["mmr"],
    },
    CareGapRule {
        measure_id: "hba1c_monitoring",
        title: "HbA1c every 90 days",
        category: CareGapCategory::Monitoring,
        min_age: None,
        max_age: None,
        gender: None,
        trigger: Trigger::AnyCondition {
            conditions: DIABETES,
        },
        interval_days: Some(90),
        keywords: &["hba1c", "hemoglobin a1c"],
        date_keys: &["hba1c", "a1c"],
    },
    CareGapRule {
        measure_id: "lipid_panel",
        title: "Lipid panel annually",
        category: CareGapCategory::Monitoring,
        min_age: None,
        max_age: None,
        gender: None,
        trigger: Trigger::AnyCondition {
            conditions: CARDIOMETABOLIC,
        },
        interval_days: Some(365),
        keywords: &["lipid panel", "cholesterol panel"],
        date_keys: &["lipid_panel", "ldl"],
    },
    CareGapRule {
        measure_id: "diabetic_eye_exam",
        title: "Diabetic retinal eye exam",
        category: CareGapCategory::Monitoring,
        min_age: None,
        max_age: None,
        gender: None,
        trigger: Trigger::AnyCondition {
            conditions: DIABETES,
        },
        interval_days: Some(365),
        keywords: &["retinal exam", "dilated eye exam", "retinopathy screening"],
        date_keys: &["eye_exam", "retinal_exam"],
    },
    CareGapRule {
        measure_id: "urine_albumin",
        title: "Urine albumin-to-creatinine ratio",
        category: CareGapCategory::Monitoring,
        min_age: None,
        max_age: None,
        gender: None,
        trigger: Trigger::AnyCondition {
            conditions: KIDNEY_RISK,
        },
        interval_days: Some(365),
        keywords: &["urine albumin", "microalbumin", "uacr"],
        date_keys: &["uacr", "urine_albumin"],
    },
    CareGapRule {
        measure_id: "metabolic_panel",
        title: "Metabolic panel for hypertension",
        category: CareGapCategory::Monitoring,
        min_age: None,
        max_age: None,
        gender: None,
        trigger: Trigger::AnyCondition {
            conditions: HYPERTENSION,
        },
        interval_days: Some(365),
        keywords: &["basic metabolic panel", "comprehensive metabolic panel", "bmp", "cmp"],
        date_keys: &["bmp", "cmp"],
    },
];

impl Trigger {
    /// The condition keywords this trigger searches for, if any.
    pub fn conditions(&self) -> Option<&'static [&'static str]> {
        match *self {
            Trigger::Always => None,
            Trigger::AnyCondition { conditions } | Trigger::AgeOrCondition { conditions, .. } => {
                Some(conditions)
            }
        }
    }
}

/// Look up a rule by measure ID.
pub fn rule(measure_id: &str) -> Option<&'static CareGapRule> {
    RULES.iter().find(|r| r.measure_id == measure_id)
}
