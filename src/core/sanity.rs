use crate::domain::model::Ledger;
use crate::domain::ports::DiagnosticSink;

/// Cross-references every recorded lead date against the assignment window
/// it was booked under and reports the ones that fall outside it.
///
/// Purely observational: nothing is mutated or filtered, and the warnings
/// have no effect on the computed pools.
pub fn check_lead_windows(ledger: &Ledger, sink: &mut dyn DiagnosticSink) {
    for resource in &ledger.resources {
        for (team, assignment) in &resource.assignments {
            for (date, _amounts) in &assignment.revenue_by_date {
                if *date < assignment.active_start || *date > assignment.active_end {
                    sink.out_of_window_lead(&resource.name, team, *date);
                }
            }
        }
    }
}
