use std::env::current_dir;
use std::process::exit;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::schedule::RentScheduler;
use crate::vault::VaultImpl;
use argument_parsing::{OutputFormat, ScheduleOptions};

mod argument_parsing;
mod formatting;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rent_schedule=warn"));

    // stdout carries the schedule itself
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn rent_schedule() {
    init_tracing();

    let result: Result<String, String> = (|| {
        let arguments = ScheduleOptions::parse();
        let vault_path = match &arguments.vault {
            Some(a) => a.clone(),
            None => current_dir().map_err(|e| e.to_string())?,
        };
        info!(vault = %vault_path.display(), "computing rent schedule");
        let vault = VaultImpl { path: vault_path };

        let scheduler = RentScheduler::from_vault_values(&vault, arguments.max_occurrences)
            .map_err(|e| e.to_string())?;
        let schedule = scheduler.generate().map_err(|e| e.to_string())?;

        match arguments.format {
            OutputFormat::Table => Ok(formatting::format_schedule_screen(
                scheduler.terms(),
                &schedule,
            )),
            OutputFormat::Json => formatting::format_schedule_json(&schedule),
        }
    })();

    match result {
        Ok(screen) => print!("{}", screen),
        Err(error) => {
            println!("Could not compute rent schedule: {}", error);
            exit(1)
        }
    }
}
