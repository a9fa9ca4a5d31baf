use crate::core::{assign, flatten, sanity, segment};
use crate::domain::model::{Ledger, PoolReport, ReportingPeriod};
use crate::domain::ports::DiagnosticSink;

/// Runs the full computation: sanity-check, flatten, segment, assign.
///
/// Single synchronous pass over fully materialized inputs; the engine does
/// no I/O and talks to the outside only through the diagnostic sink.
pub struct PoolEngine<D: DiagnosticSink> {
    diagnostics: D,
}

impl<D: DiagnosticSink> PoolEngine<D> {
    pub fn new(diagnostics: D) -> Self {
        Self { diagnostics }
    }

    pub fn run(&mut self, ledger: &Ledger, period: &ReportingPeriod) -> PoolReport {
        tracing::debug!(
            "Segmenting {} resources across {} teams",
            ledger.resources.len(),
            ledger.team_names().len()
        );

        sanity::check_lead_windows(ledger, &mut self.diagnostics);

        let events = flatten::flatten_revenue(ledger, period);
        tracing::debug!("Flattened {} revenue events", events.len());

        let mut pools = segment::segment_pools(ledger, period);
        tracing::debug!("Segmented {} pools", pools.len());

        assign::assign_events(&mut pools, &events);

        PoolReport { pools, events }
    }
}
