use crate::domain::model::{Assignment, ConfigData, Ledger, ReportingPeriod, ResourceEntry};
use crate::utils::error::{PoolError, Result};
use crate::utils::validation;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

// Raw file shapes. Keys are PascalCase in the legacy documents, and the
// resource/team objects stay as serde_json maps so that insertion order
// (preserve_order) survives into the ledger.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct TeamsFile {
    start: String,
    end: String,
    resources: serde_json::Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AssignmentFile {
    start: String,
    end: String,
    leads: serde_json::Map<String, Value>,
}

/// Loads the commission settings. The pool computation never reads these;
/// they are carried through for the reporting side.
pub fn load_config(path: &Path) -> Result<ConfigData> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).map_err(|source| PoolError::JsonError {
        file: path.display().to_string(),
        source,
    })
}

/// Loads the reporting period and the assignment ledger from teams.json.
///
/// Fails fast on a missing file, malformed JSON, any unparsable date, or a
/// period with `end <= start`; no partial ledger is ever returned.
pub fn load_teams(path: &Path) -> Result<(ReportingPeriod, Ledger)> {
    let raw = read_input(path)?;
    let file: TeamsFile = serde_json::from_str(&raw).map_err(|source| PoolError::JsonError {
        file: path.display().to_string(),
        source,
    })?;

    let start = parse_lax_date(&file.start, "Start")?;
    let end = parse_lax_date(&file.end, "End")?;
    let period = ReportingPeriod::new(start, end)?;

    let mut resources = Vec::with_capacity(file.resources.len());
    for (resource_name, teams_value) in file.resources {
        validation::validate_non_empty_string("resource name", &resource_name)?;
        let teams: serde_json::Map<String, Value> =
            serde_json::from_value(teams_value).map_err(|source| PoolError::JsonError {
                file: format!("{} (resource {resource_name})", path.display()),
                source,
            })?;

        let mut assignments = Vec::with_capacity(teams.len());
        for (team_name, assignment_value) in teams {
            validation::validate_non_empty_string("team name", &team_name)?;
            let context = format!("{resource_name}/{team_name}");
            let raw_assignment: AssignmentFile = serde_json::from_value(assignment_value)
                .map_err(|source| PoolError::JsonError {
                    file: format!("{} ({context})", path.display()),
                    source,
                })?;

            let mut revenue_by_date = Vec::with_capacity(raw_assignment.leads.len());
            for (date_key, amounts_value) in raw_assignment.leads {
                let date = parse_lax_date(&date_key, &format!("{context} Leads"))?;
                let amounts: Vec<Decimal> = serde_json::from_value(amounts_value)
                    .map_err(|source| PoolError::JsonError {
                        file: format!("{} ({context} Leads {date_key})", path.display()),
                        source,
                    })?;
                revenue_by_date.push((date, amounts));
            }

            assignments.push((
                team_name,
                Assignment {
                    active_start: parse_lax_date(&raw_assignment.start, &context)?,
                    active_end: parse_lax_date(&raw_assignment.end, &context)?,
                    revenue_by_date,
                },
            ));
        }
        resources.push(ResourceEntry {
            name: resource_name,
            assignments,
        });
    }

    Ok((period, Ledger { resources }))
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PoolError::MissingInputError {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

/// Parses a calendar date from the formats the legacy documents used,
/// truncating any time-of-day component to date granularity.
pub fn parse_lax_date(raw: &str, context: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(datetime.date());
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(datetime.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%m/%d/%Y") {
        return Ok(date);
    }
    Err(PoolError::DateParseError {
        value: raw.to_string(),
        context: context.to_string(),
    })
}
