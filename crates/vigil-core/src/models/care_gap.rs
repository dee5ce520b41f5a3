use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CareGapInput {
    pub age: u32,
    pub gender: Gender,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub procedures: Vec<String>,
    #[serde(default)]
    pub immunizations: Vec<String>,
    /// Lab or procedure key (e.g. "hba1c", "colonoscopy") to the date of the
    /// most recent result.
    #[serde(default)]
    pub last_lab_dates: BTreeMap<String, Date>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CareGapCategory {
    Screening,
    Immunization,
    Monitoring,
}

/// Ordered by urgency: `Overdue` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CareGapStatus {
    Overdue,
    DueSoon,
    Satisfied,
    NotApplicable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CareGap {
    pub measure_id: String,
    pub title: String,
    pub category: CareGapCategory,
    pub status: CareGapStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed_date: Option<Date>,
    pub rationale: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StatusCounts {
    pub overdue: u32,
    pub due_soon: u32,
    pub satisfied: u32,
    pub not_applicable: u32,
}

impl StatusCounts {
    pub fn tally<'a>(gaps: impl IntoIterator<Item = &'a CareGap>) -> Self {
        let mut counts = Self::default();
        for gap in gaps {
            match gap.status {
                CareGapStatus::Overdue => counts.overdue += 1,
                CareGapStatus::DueSoon => counts.due_soon += 1,
                CareGapStatus::Satisfied => counts.satisfied += 1,
                CareGapStatus::NotApplicable => counts.not_applicable += 1,
            }
        }
        counts
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CareGapResult {
    pub patient_id: String,
    pub gaps: Vec<CareGap>,
    pub counts: StatusCounts,
    pub generated_at: jiff::Timestamp,
}

impl CareGapResult {
    pub fn gap(&self, measure_id: &str) -> Option<&CareGap> {
        self.gaps.iter().find(|g| g.measure_id == measure_id)
    }

    pub fn by_category(&self) -> BTreeMap<CareGapCategory, Vec<&CareGap>> {
        let mut groups: BTreeMap<CareGapCategory, Vec<&CareGap>> = BTreeMap::new();
        for gap in &self.gaps {
            groups.entry(gap.category).or_default().push(gap);
        }
        groups
    }
}
