use crate::utils::error::{PoolError, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date window over which pools and revenue are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ReportingPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(PoolError::InvalidPeriodError { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every day of the period, start to end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

/// One resource's membership window on one team, with its recorded revenue.
///
/// `revenue_by_date` keeps the input's key order, and each date's amount list
/// keeps the input's element order; multiple independent entries may land on
/// the same date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub active_start: NaiveDate,
    pub active_end: NaiveDate,
    pub revenue_by_date: Vec<(NaiveDate, Vec<Decimal>)>,
}

impl Assignment {
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.active_start <= date && date <= self.active_end
    }
}

/// A resource and its per-team assignments, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    pub assignments: Vec<(String, Assignment)>,
}

/// The full input structure mapping resources to their team assignments and
/// revenue. Resource and team iteration order is significant downstream, so
/// the ledger is a vec of entries rather than a hash map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub resources: Vec<ResourceEntry>,
}

impl Ledger {
    /// Distinct team names in first-seen order across all resources.
    pub fn team_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for resource in &self.resources {
            for (team, _) in &resource.assignments {
                if !names.iter().any(|n| n == team) {
                    names.push(team.clone());
                }
            }
        }
        names
    }

    /// Resources assigned to `team` and active on `date`, in resource
    /// iteration order.
    pub fn members_on(&self, team: &str, date: NaiveDate) -> Vec<String> {
        self.resources
            .iter()
            .filter(|resource| {
                resource
                    .assignments
                    .iter()
                    .any(|(t, assignment)| t == team && assignment.is_active_on(date))
            })
            .map(|resource| resource.name.clone())
            .collect()
    }
}

/// One discrete, dated, attributed monetary amount derived from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEvent {
    pub date: NaiveDate,
    pub team: String,
    pub resource: String,
    pub amount: Decimal,
}

/// A maximal contiguous date range during which a team's member-resource set
/// is constant, plus the revenue generated inside the range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pool {
    pub team: String,
    pub member_resources: Vec<String>,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    pub events: Vec<RevenueEvent>,
}

impl Pool {
    pub fn open(team: String, member_resources: Vec<String>, day: NaiveDate) -> Self {
        Self {
            team,
            member_resources,
            first_day: day,
            last_day: day,
            events: Vec::new(),
        }
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.first_day <= date && date <= self.last_day
    }

    pub fn total_events(&self) -> usize {
        self.events.len()
    }

    pub fn total_revenue(&self) -> Decimal {
        self.events.iter().map(|e| e.amount).sum()
    }
}

/// Output of one engine run: the ordered pool sequence plus the full
/// flattened event list for the raw/debug view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolReport {
    pub pools: Vec<Pool>,
    pub events: Vec<RevenueEvent>,
}

/// Commission settings read from config.json. Not consumed by the pool
/// computation; carried through for the reporting side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigData {
    pub commission_rate: Decimal,
    pub leads_bonus: Decimal,
}
