use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Nursing and clinical facts consumed by the Morse, LACE and Braden scorers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientRiskFactors {
    pub age: u32,
    #[serde(default)]
    pub has_chronic_conditions: Vec<String>,

    // LACE
    /// Days.
    pub length_of_stay: u32,
    pub acuity: Acuity,
    pub charlson_score: u32,
    #[serde(rename = "edVisits6Months")]
    pub ed_visits_6_months: u32,

    // Morse
    pub history_of_falling: bool,
    pub secondary_diagnosis: bool,
    pub ambulatory_aid: AmbulatoryAid,
    pub iv_saline_lock: bool,
    pub gait_transfer: GaitTransfer,
    pub mental_status: MorseMentalStatus,

    // Braden, each 1–4 except friction/shear 1–3
    pub sensory_perception: u8,
    pub moisture: u8,
    pub activity: u8,
    pub mobility: u8,
    pub nutrition: u8,
    pub friction_shear: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Acuity {
    Elective,
    Urgent,
    Emergent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AmbulatoryAid {
    None,
    #[serde(alias = "crutches/cane/walker")]
    CrutchesCaneWalker,
    Furniture,
}

/// Morse gait/transfer. `Normal` also covers bed rest and wheelchair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GaitTransfer {
    #[serde(alias = "normal/bedrest/wheelchair")]
    Normal,
    Weak,
    Impaired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MorseMentalStatus {
    Oriented,
    /// Forgets own limitations or overestimates ability.
    #[serde(alias = "forgets/overestimates")]
    ForgetsLimitations,
}
