pub mod assign;
pub mod engine;
pub mod flatten;
pub mod sanity;
pub mod segment;

pub use crate::domain::model::{Ledger, Pool, PoolReport, ReportingPeriod, RevenueEvent};
pub use crate::domain::ports::{DiagnosticSink, ReportSink};
pub use crate::utils::error::Result;
