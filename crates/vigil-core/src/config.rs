//! Engine tuning knobs shared by the aggregator and the care gap analyzer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct EngineConfig {
    /// Maximum length of the composite `primaryRecommendations` list.
    pub primary_recommendation_limit: usize,
    /// How many recommendations each component scorer contributes.
    pub recommendations_per_scorer: usize,
    /// Trailing share of a care-gap interval treated as "due soon".
    pub due_soon_fraction: f64,
    /// Report rules that do not apply with status `not_applicable`.
    pub include_not_applicable: bool,
    /// Sepsis data completeness below which a caveat is attached.
    pub completeness_warning_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            primary_recommendation_limit: 5,
            recommendations_per_scorer: 2,
            due_soon_fraction: 0.10,
            include_not_applicable: false,
            completeness_warning_threshold: 0.75,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.primary_recommendation_limit == 0 {
            return Err(invalid("primary_recommendation_limit", "must be at least 1"));
        }
        if self.recommendations_per_scorer == 0 {
            return Err(invalid("recommendations_per_scorer", "must be at least 1"));
        }
        if !(0.0..1.0).contains(&self.due_soon_fraction) {
            return Err(invalid(
                "due_soon_fraction",
                &format!("{} is outside [0, 1)", self.due_soon_fraction),
            ));
        }
        if !(0.0..=1.0).contains(&self.completeness_warning_threshold) {
            return Err(invalid(
                "completeness_warning_threshold",
                &format!("{} is outside [0, 1]", self.completeness_warning_threshold),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> CoreError {
    CoreError::InvalidConfig {
        field: field.to_string(),
        message: message.to_string(),
    }
}
