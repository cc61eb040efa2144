//! Console front-end for clinic records.
//!
//! # Responsibility
//! - Resolve config, start logging, open the store (fatal on failure).
//! - Drive the interactive menu over stdin/stdout.
//! - Close the store connection on exit.

mod args;
mod menu;
mod table;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use clinic_core::{
    init_logging, open_db, ClinicConfig, ClinicService, SqliteDoctorRepository,
    SqlitePatientRepository,
};
use log::{info, warn};
use menu::Menu;
use std::io;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ClinicConfig::load(path)?,
        None => ClinicConfig::default(),
    };
    let config = args.apply_to(config)?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level(), log_dir).context("failed to initialize logging")?;
    }

    let conn = open_db(&config.database_path).with_context(|| {
        format!(
            "failed to open database `{}`",
            config.database_path.display()
        )
    })?;
    println!("Connected to the database.");

    {
        let service = ClinicService::new(
            SqlitePatientRepository::new(&conn),
            SqliteDoctorRepository::new(&conn),
        );
        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(&service, stdin.lock(), stdout.lock())
            .run()
            .context("console I/O failed")?;
    }

    match conn.close() {
        Ok(()) => {
            info!("event=db_close module=cli status=ok");
            println!("Connection closed. Goodbye!");
        }
        Err((_, err)) => {
            warn!("event=db_close module=cli status=error error={err}");
            println!("Error closing connection: {err}");
        }
    }
    Ok(())
}
