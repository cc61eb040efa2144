//! Command-line arguments for the console front-end.

use clap::Parser;
use clinic_core::{ClinicConfig, ConfigError};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "clinic", version, about = "Patient and doctor records for a small clinic")]
pub struct Args {
    /// SQLite database file (created when missing).
    #[arg(long, env = "CLINIC_DB")]
    pub db: Option<PathBuf>,

    /// TOML config file with `database_path`, `log_level`, `log_dir`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for rolling log files.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// Applies flag overrides on top of a loaded (or default) config.
    ///
    /// The merged result is validated, so a bad `--log-level` is rejected even
    /// when file logging stays off.
    pub fn apply_to(self, mut config: ClinicConfig) -> Result<ClinicConfig, ConfigError> {
        if let Some(db) = self.db {
            config.database_path = db;
        }
        if let Some(level) = self.log_level {
            config.log_level = Some(level);
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = Some(dir);
        }
        config.validate()?;
        Ok(config)
    }
}
