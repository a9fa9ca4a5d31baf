use anyhow::Context;
use clap::Parser;
use pool_report::adapters::{export, input};
use pool_report::utils::{logger, validation::Validate};
use pool_report::{CliConfig, ConsoleSink, PoolEngine, ReportSink};
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pool-report");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        tracing::error!("Pool calculation failed: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    let settings = input::load_config(&config.config_path())
        .with_context(|| format!("loading {}", config.config_path().display()))?;
    tracing::debug!(
        "Commission settings (pass-through): rate {}, leads bonus {}",
        settings.commission_rate,
        settings.leads_bonus
    );

    let (period, ledger) = input::load_teams(&config.teams_path())
        .with_context(|| format!("loading {}", config.teams_path().display()))?;

    tracing::info!(
        "Calculating pools from {} to {} inclusive",
        period.start,
        period.end
    );
    tracing::info!(
        "Processing {} resources across {} teams",
        ledger.resources.len(),
        ledger.team_names().len()
    );

    let report = PoolEngine::new(ConsoleSink::new()).run(&ledger, &period);

    if let Some(path) = &config.export_events {
        export::export_events_csv(&report.events, Path::new(path))
            .with_context(|| format!("exporting events to {path}"))?;
        tracing::info!("Exported {} events to {path}", report.events.len());
    }

    ConsoleSink::new().render(&report)?;
    Ok(())
}
