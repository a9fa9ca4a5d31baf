pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::ConsoleSink;
pub use config::CliConfig;
pub use core::engine::PoolEngine;
pub use domain::model::{
    Assignment, ConfigData, Ledger, Pool, PoolReport, ReportingPeriod, ResourceEntry, RevenueEvent,
};
pub use domain::ports::{DiagnosticSink, NullDiagnostics, ReportSink};
pub use utils::error::{PoolError, Result};
