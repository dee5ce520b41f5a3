//! JSON request shapes accepted by `vigil-eval` and their dispatch.

use std::str::FromStr;

use serde::Deserialize;
use vigil_core::clock::Clock;
use vigil_core::config::EngineConfig;
use vigil_core::models::care_gap::CareGapInput;
use vigil_core::models::risk_factors::PatientRiskFactors;
use vigil_core::models::vitals::{LabsInput, VitalsInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Sepsis,
    Risk,
    CareGaps,
    Scales,
    Measures,
    InitConfig,
}

impl Command {
    /// Whether the command reads a request body.
    pub fn takes_input(&self) -> bool {
        matches!(self, Command::Sepsis | Command::Risk | Command::CareGaps)
    }
}

impl FromStr for Command {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sepsis" => Ok(Command::Sepsis),
            "risk" => Ok(Command::Risk),
            "care-gaps" => Ok(Command::CareGaps),
            "scales" => Ok(Command::Scales),
            "measures" => Ok(Command::Measures),
            "init-config" => Ok(Command::InitConfig),
            other => Err(eyre::eyre!("unknown command: {other}")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SepsisRequest {
    pub patient_id: String,
    #[serde(default)]
    pub vitals: VitalsInput,
    #[serde(default)]
    pub labs: LabsInput,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRequest {
    pub patient_id: String,
    pub factors: PatientRiskFactors,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareGapRequest {
    pub patient_id: String,
    pub input: CareGapInput,
}

/// Run `command` over a JSON body and return the JSON result.
pub fn evaluate(
    command: Command,
    body: &str,
    config: &EngineConfig,
    clock: &dyn Clock,
) -> eyre::Result<serde_json::Value> {
    let value = match command {
        Command::Sepsis => {
            let request: SepsisRequest = serde_json::from_str(body)?;
            let result = vigil_scoring::sepsis::assess_sepsis(
                &request.patient_id,
                &request.vitals,
                &request.labs,
                config,
            )?;
            if let Some(caveat) = &result.caveat {
                tracing::warn!(patient_id = %request.patient_id, "{caveat}");
            }
            serde_json::to_value(result)?
        }
        Command::Risk => {
            let request: RiskRequest = serde_json::from_str(body)?;
            let result = vigil_scoring::composite::assess_risk(
                &request.patient_id,
                &request.factors,
                config,
                clock,
            )?;
            serde_json::to_value(result)?
        }
        Command::CareGaps => {
            let request: CareGapRequest = serde_json::from_str(body)?;
            let result = vigil_caregaps::analyze_care_gaps(
                &request.patient_id,
                &request.input,
                config,
                clock,
            )?;
            serde_json::to_value(result)?
        }
        Command::Scales => serde_json::to_value(vigil_scoring::scale_definitions()?)?,
        Command::Measures => serde_json::to_value(vigil_caregaps::rules::RULES)?,
        Command::InitConfig => {
            return Err(eyre::eyre!("init-config does not evaluate a request"));
        }
    };
    Ok(value)
}
