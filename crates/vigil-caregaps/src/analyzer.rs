use jiff::Span;
use jiff::civil::Date;
use vigil_core::clock::Clock;
use vigil_core::config::EngineConfig;
use vigil_core::models::care_gap::{
    CareGap, CareGapInput, CareGapResult, CareGapStatus, Gender, StatusCounts,
};

use crate::error::CareGapError;
use crate::rules::{CareGapRule, RULES, Trigger};
use crate::text::first_mention;

const MAX_AGE: u32 = 130;

/// Evaluate every rule in [`RULES`] against one patient.
///
/// Rules that do not apply are left out unless
/// `config.include_not_applicable` is set. Gaps come back ordered overdue,
/// due soon, satisfied, not applicable, and in table order within a status.
pub fn analyze_care_gaps(
    patient_id: &str,
    input: &CareGapInput,
    config: &EngineConfig,
    clock: &dyn Clock,
) -> Result<CareGapResult, CareGapError> {
    config.validate()?;
    if input.age > MAX_AGE {
        return Err(CareGapError::InvalidAge(input.age));
    }

    let generated_at = clock.now();
    let today = clock.today();
    if let Some((key, date)) = input.last_lab_dates.iter().find(|(_, date)| **date > today) {
        return Err(CareGapError::FutureDate {
            key: key.clone(),
            date: *date,
            today,
        });
    }

    let mut gaps = Vec::new();
    for rule in RULES {
        match applicability(rule, input)? {
            Some(rationale) => gaps.push(evaluate_rule(rule, input, today, config, rationale)?),
            None if config.include_not_applicable => gaps.push(not_applicable(rule)),
            None => {}
        }
    }
    gaps.sort_by_key(|gap| gap.status);

    let counts = StatusCounts::tally(&gaps);
    tracing::debug!(
        measures = gaps.len(),
        overdue = counts.overdue,
        due_soon = counts.due_soon,
        satisfied = counts.satisfied,
        "care gaps analyzed"
    );

    Ok(CareGapResult {
        patient_id: patient_id.to_string(),
        gaps,
        counts,
        generated_at,
    })
}

/// Why `rule` applies to this patient, or `None` when it does not.
pub fn applicability(
    rule: &CareGapRule,
    input: &CareGapInput,
) -> Result<Option<String>, CareGapError> {
    if rule.gender.is_some_and(|g| g != input.gender) {
        return Ok(None);
    }
    if rule.min_age.is_some_and(|min| input.age < min) || rule.max_age.is_some_and(|max| input.age > max) {
        return Ok(None);
    }

    let mut reasons = Vec::new();
    if let Some(gender) = rule.gender {
        reasons.push(match gender {
            Gender::Female => "Female".to_string(),
            Gender::Male => "Male".to_string(),
        });
    }
    match (rule.min_age, rule.max_age) {
        (Some(min), Some(max)) => reasons.push(format!("age {} within {min}-{max}", input.age)),
        (Some(min), None) => reasons.push(format!("age {} >= {min}", input.age)),
        (None, Some(max)) => reasons.push(format!("age {} <= {max}", input.age)),
        (None, None) => {}
    }

    match rule.trigger {
        Trigger::Always => {}
        Trigger::AnyCondition { conditions } => {
            let Some(condition) = first_mention(&input.conditions, conditions)? else {
                return Ok(None);
            };
            reasons.push(format!("condition: {condition}"));
        }
        Trigger::AgeOrCondition {
            min_age,
            conditions,
        } => {
            if input.age >= min_age {
                reasons.push(format!("age {} >= {min_age}", input.age));
            } else {
                let Some(condition) = first_mention(&input.conditions, conditions)? else {
                    return Ok(None);
                };
                reasons.push(format!("condition: {condition}"));
            }
        }
    }

    if reasons.is_empty() {
        reasons.push("recommended for all patients".to_string());
    }
    let mut rationale = reasons.join(", ");
    if let Some(first) = rationale.get(..1) {
        let upper = first.to_uppercase();
        rationale.replace_range(..1, &upper);
    }
    Ok(Some(rationale))
}

fn evaluate_rule(
    rule: &CareGapRule,
    input: &CareGapInput,
    today: Date,
    config: &EngineConfig,
    rationale: String,
) -> Result<CareGap, CareGapError> {
    let last_completed = rule
        .date_keys
        .iter()
        .filter_map(|key| {
            input
                .last_lab_dates
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(key))
                .map(|(_, date)| *date)
        })
        .max();

    let (status, due_date, detail) = match (last_completed, rule.interval_days) {
        (Some(last), None) => (CareGapStatus::Satisfied, None, format!("completed {last}")),
        (Some(last), Some(interval)) => {
            let elapsed = i64::from((today - last).get_days());
            let due = last.checked_add(Span::new().days(interval))?;
            let status = interval_status(elapsed, interval, config.due_soon_fraction);
            (status, Some(due), format!("last completed {last}, due {due}"))
        }
        (None, interval) => {
            let documented = match first_mention(&input.procedures, rule.keywords)? {
                Some(entry) => Some(entry),
                None => first_mention(&input.immunizations, rule.keywords)?,
            };
            // Undated evidence only settles one-time measures.
            match (documented, interval) {
                (Some(entry), None) => (
                    CareGapStatus::Satisfied,
                    None,
                    format!("documented without date ({entry})"),
                ),
                (Some(entry), Some(_)) => (
                    CareGapStatus::Overdue,
                    None,
                    format!("documented without date ({entry}), interval cannot be confirmed"),
                ),
                (None, _) => (
                    CareGapStatus::Overdue,
                    None,
                    "no record of completion".to_string(),
                ),
            }
        }
    };

    Ok(CareGap {
        measure_id: rule.measure_id.to_string(),
        title: rule.title.to_string(),
        category: rule.category,
        status,
        due_date,
        last_completed_date: last_completed,
        rationale: format!("{rationale}; {detail}"),
    })
}

/// Overdue past the interval, due soon inside the trailing
/// `due_soon_fraction` of it, satisfied otherwise.
pub fn interval_status(elapsed_days: i64, interval_days: i64, due_soon_fraction: f64) -> CareGapStatus {
    if elapsed_days > interval_days {
        return CareGapStatus::Overdue;
    }
    let due_soon_from = interval_days as f64 * (1.0 - due_soon_fraction);
    if elapsed_days as f64 >= due_soon_from {
        CareGapStatus::DueSoon
    } else {
        CareGapStatus::Satisfied
    }
}

fn not_applicable(rule: &CareGapRule) -> CareGap {
    CareGap {
        measure_id: rule.measure_id.to_string(),
        title: rule.title.to_string(),
        category: rule.category,
        status: CareGapStatus::NotApplicable,
        due_date: None,
        last_completed_date: None,
        rationale: "Age, gender or condition criteria not met".to_string(),
    }
}
