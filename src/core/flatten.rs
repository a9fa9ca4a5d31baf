use crate::domain::model::{Ledger, ReportingPeriod, RevenueEvent};

/// Expands the nested ledger into a flat, ordered list of revenue events,
/// one per (assignment, date, entry-in-list) triple, filtered to the period.
///
/// The assignment-level filter is `active_start >= period.start ||
/// active_end <= period.end`, carried over verbatim from the legacy report.
/// It is not a real interval-overlap test: it drops assignments that fully
/// contain the period and admits some that never touch it. Known quirk, kept
/// until product confirms the intended predicate; the per-entry date filter
/// below catches most of the fallout.
pub fn flatten_revenue(ledger: &Ledger, period: &ReportingPeriod) -> Vec<RevenueEvent> {
    let mut events = Vec::new();
    for resource in &ledger.resources {
        for (team, assignment) in &resource.assignments {
            if !(assignment.active_start >= period.start || assignment.active_end <= period.end) {
                continue;
            }
            for (date, amounts) in &assignment.revenue_by_date {
                if !period.contains(*date) {
                    continue;
                }
                for amount in amounts {
                    events.push(RevenueEvent {
                        date: *date,
                        team: team.clone(),
                        resource: resource.name.clone(),
                        amount: *amount,
                    });
                }
            }
        }
    }
    events
}
