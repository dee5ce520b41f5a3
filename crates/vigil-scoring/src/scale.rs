//! Band lookup shared by every scorer.
//!
//! A [`Scale`] is a closed score range plus an ordered list of [`Band`]s.
//! Which end of a band `threshold` marks depends on the scale direction:
//!
//! - `HigherIsWorse`: bands ascend by their lowest score; a score lands in
//!   the last band whose threshold is `<=` the score.
//! - `LowerIsWorse`: bands ascend by their highest score; a score lands in
//!   the first band whose threshold is `>=` the score.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vigil_core::error::CoreError;
use vigil_core::models::risk_score::{RiskLevel, RiskScore, ScoreDirection};

use crate::error::ScoringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleRange {
    pub min: u32,
    pub max: u32,
}

impl ScaleRange {
    pub fn contains(&self, score: u32) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Band<L> {
    pub threshold: u32,
    pub level: L,
    pub label: &'static str,
    pub recommendations: &'static [&'static str],
}

#[derive(Debug)]
pub struct Scale<L: 'static> {
    pub name: &'static str,
    pub range: ScaleRange,
    pub direction: ScoreDirection,
    pub bands: &'static [Band<L>],
}

impl<L: 'static> Scale<L> {
    pub fn bandify(&self, score: u32) -> Result<&'static Band<L>, ScoringError> {
        bandify(score, self.range, self.bands, self.direction)
    }

    pub fn interpretation(&self, score: u32, band: &Band<L>) -> String {
        format!(
            "{} ({} {score}/{})",
            band.label, self.name, self.range.max
        )
    }
}

impl<L: Serialize + 'static> Scale<L> {
    /// Describe the scale for display alongside scores.
    pub fn definition(&self) -> Result<ScaleDefinition, ScoringError> {
        let bands = self
            .bands
            .iter()
            .map(|band| -> Result<BandDefinition, ScoringError> {
                Ok(BandDefinition {
                    threshold: band.threshold,
                    level: serde_json::to_value(&band.level).map_err(CoreError::from)?,
                    label: band.label.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ScaleDefinition {
            name: self.name.to_string(),
            min_score: self.range.min,
            max_score: self.range.max,
            direction: self.direction,
            bands,
        })
    }
}

impl Scale<RiskLevel> {
    /// Band a score and build the shared output shape.
    pub fn assess(&self, score: u32) -> Result<RiskScore, ScoringError> {
        let band = self.bandify(score)?;
        Ok(RiskScore {
            name: self.name.to_string(),
            score,
            min_score: (self.range.min > 0).then_some(self.range.min),
            max_score: self.range.max,
            direction: self.direction,
            risk_level: band.level,
            band: band.label.to_string(),
            interpretation: self.interpretation(score, band),
            recommendations: band.recommendations.iter().map(|r| r.to_string()).collect(),
        })
    }
}

/// Map `score` to its band. Fails if the bands are malformed or the score
/// lies outside `range`.
pub fn bandify<L>(
    score: u32,
    range: ScaleRange,
    bands: &[Band<L>],
    direction: ScoreDirection,
) -> Result<&Band<L>, ScoringError> {
    validate_bands(range, bands, direction)?;

    if !range.contains(score) {
        return Err(ScoringError::ScoreOutOfRange {
            score,
            min: range.min,
            max: range.max,
        });
    }

    let band = match direction {
        ScoreDirection::HigherIsWorse => bands.iter().rev().find(|b| b.threshold <= score),
        ScoreDirection::LowerIsWorse => bands.iter().find(|b| b.threshold >= score),
    };
    band.ok_or_else(|| ScoringError::InvalidBands(format!("no band covers score {score}")))
}

fn validate_bands<L>(
    range: ScaleRange,
    bands: &[Band<L>],
    direction: ScoreDirection,
) -> Result<(), ScoringError> {
    if range.min > range.max {
        return Err(ScoringError::InvalidBands(format!(
            "range [{}, {}] is empty",
            range.min, range.max
        )));
    }
    let (Some(first), Some(last)) = (bands.first(), bands.last()) else {
        return Err(ScoringError::InvalidBands("no bands defined".to_string()));
    };
    if let Some(pair) = bands.windows(2).find(|w| w[0].threshold >= w[1].threshold) {
        return Err(ScoringError::InvalidBands(format!(
            "thresholds must strictly increase ({} then {})",
            pair[0].threshold, pair[1].threshold
        )));
    }
    if let Some(band) = bands.iter().find(|b| !range.contains(b.threshold)) {
        return Err(ScoringError::InvalidBands(format!(
            "threshold {} is outside [{}, {}]",
            band.threshold, range.min, range.max
        )));
    }
    let covered = match direction {
        ScoreDirection::HigherIsWorse => first.threshold == range.min,
        ScoreDirection::LowerIsWorse => last.threshold == range.max,
    };
    if !covered {
        return Err(ScoringError::InvalidBands(format!(
            "bands do not cover the whole range [{}, {}]",
            range.min, range.max
        )));
    }
    Ok(())
}

/// Serializable view of a [`Scale`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScaleDefinition {
    pub name: String,
    pub min_score: u32,
    pub max_score: u32,
    pub direction: ScoreDirection,
    pub bands: Vec<BandDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BandDefinition {
    pub threshold: u32,
    pub level: serde_json::Value,
    pub label: String,
}
