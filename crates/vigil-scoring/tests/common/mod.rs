#![allow(dead_code)]

use vigil_core::models::risk_factors::{
    Acuity, AmbulatoryAid, GaitTransfer, MorseMentalStatus, PatientRiskFactors,
};

/// A low-risk patient: every scale sits in its best band.
pub fn baseline_factors() -> PatientRiskFactors {
    PatientRiskFactors {
        age: 50,
        has_chronic_conditions: Vec::new(),
        length_of_stay: 0,
        acuity: Acuity::Elective,
        charlson_score: 0,
        ed_visits_6_months: 0,
        history_of_falling: false,
        secondary_diagnosis: false,
        ambulatory_aid: AmbulatoryAid::None,
        iv_saline_lock: false,
        gait_transfer: GaitTransfer::Normal,
        mental_status: MorseMentalStatus::Oriented,
        sensory_perception: 4,
        moisture: 4,
        activity: 4,
        mobility: 4,
        nutrition: 4,
        friction_shear: 3,
    }
}

pub fn with_braden(subscales: [u8; 6]) -> PatientRiskFactors {
    let [sensory_perception, moisture, activity, mobility, nutrition, friction_shear] = subscales;
    PatientRiskFactors {
        sensory_perception,
        moisture,
        activity,
        mobility,
        nutrition,
        friction_shear,
        ..baseline_factors()
    }
}
