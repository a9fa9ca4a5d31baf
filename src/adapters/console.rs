use crate::domain::model::{Pool, PoolReport, RevenueEvent};
use crate::domain::ports::{DiagnosticSink, ReportSink};
use crate::utils::error::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Console renderer for the pool report. Sanity warnings go to the log;
/// the report itself goes to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }

    fn headline(&self, message: &str) {
        println!("{message}");
        println!("{}", "-".repeat(message.len()));
    }

    fn message(&self, message: &str) {
        println!("{message}");
    }

    fn pool_heading(&self, pool: &Pool) -> String {
        if pool.first_day == pool.last_day {
            format!("Pool: {} {}", pool.team, pool.first_day)
        } else {
            format!("Pool: {} {}-{}", pool.team, pool.first_day, pool.last_day)
        }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn out_of_window_lead(&mut self, resource: &str, team: &str, date: NaiveDate) {
        tracing::warn!(
            "{resource} booked lead for {team} on {date}, but was not a team member at that time"
        );
    }
}

impl ReportSink for ConsoleSink {
    fn render(&mut self, report: &PoolReport) -> Result<()> {
        for pool in &report.pools {
            self.headline(&self.pool_heading(pool));
            let members: Vec<String> = pool
                .member_resources
                .iter()
                .map(|resource| {
                    let leads = pool
                        .events
                        .iter()
                        .filter(|e| &e.resource == resource)
                        .count();
                    format!("{resource} ({leads})")
                })
                .collect();
            self.message(&members.join(", "));
            self.message(&format!(
                "{} leads, {} revenue",
                pool.total_events(),
                format_money(pool.total_revenue())
            ));
            self.message("");
        }

        self.headline("All leads (debug)");
        let mut by_date: Vec<&RevenueEvent> = report.events.iter().collect();
        // Stable sort: events on the same date keep their flattened order.
        by_date.sort_by_key(|e| e.date);
        for event in by_date {
            self.message(&format!(
                "{:>10} {:>10} {:>10} {:>10}",
                event.date.to_string(),
                event.team,
                event.resource,
                format_money(event.amount)
            ));
        }
        Ok(())
    }
}

pub fn format_money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
