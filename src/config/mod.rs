use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "pool-report")]
#[command(about = "Segments team membership into pools and attributes daily revenue")]
pub struct CliConfig {
    /// Directory containing config.json and teams.json
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    #[arg(long, help = "Commission config file (defaults to <data-dir>/config.json)")]
    pub config_file: Option<String>,

    #[arg(long, help = "Teams ledger file (defaults to <data-dir>/teams.json)")]
    pub teams_file: Option<String>,

    #[arg(long, help = "Write the flattened revenue events to this CSV file")]
    pub export_events: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn config_path(&self) -> PathBuf {
        match &self.config_file {
            Some(path) => PathBuf::from(path),
            None => Path::new(&self.data_dir).join("config.json"),
        }
    }

    pub fn teams_path(&self) -> PathBuf {
        match &self.teams_file {
            Some(path) => PathBuf::from(path),
            None => Path::new(&self.data_dir).join("teams.json"),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_dir", &self.data_dir)?;
        if let Some(path) = &self.config_file {
            validation::validate_path("config_file", path)?;
        }
        if let Some(path) = &self.teams_file {
            validation::validate_path("teams_file", path)?;
        }
        if let Some(path) = &self.export_events {
            validation::validate_path("export_events", path)?;
        }
        Ok(())
    }
}
