use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Bedside vital signs. Every field is optional; `None` means the value was
/// not available, never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VitalsInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<f64>,
    #[serde(
        rename = "systolicBP",
        alias = "systolicBp",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub systolic_bp: Option<f64>,
    #[serde(
        rename = "diastolicBP",
        alias = "diastolicBp",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub diastolic_bp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<f64>,
    /// Degrees Fahrenheit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    /// Percent, 0–100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oxygen_saturation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mental_status: Option<MentalStatus>,
    /// Patient is on supplemental oxygen (NEWS2 "air or oxygen").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplemental_oxygen: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MentalStatus {
    Alert,
    Altered,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LabsInput {
    /// White cell count, 10³/µL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wbc: Option<f64>,
    /// mmol/L.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lactate: Option<f64>,
}
