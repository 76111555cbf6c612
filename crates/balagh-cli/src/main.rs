//! Balagh CLI - report public-space issues to City Hall from the terminal
//!
//! Submit a photo report, browse the shared feed, and manage backend profiles.

mod cli;
mod commands;
mod config_profiles;
mod devices;
mod error;

use balagh_core::models::Coordinates;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::categories::run_categories;
use crate::commands::completions::run_completions;
use crate::commands::config::run_config;
use crate::commands::list::run_list;
use crate::commands::map::run_map;
use crate::commands::show::run_show;
use crate::commands::submit::{run_submit, SubmitArgs};
use crate::error::CliError;

const DEFAULT_LOG_FILTER: &str = "balagh_core=info,balagh_cli=info";

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let profile = cli.profile.as_deref();

    match cli.command {
        Commands::Submit {
            title,
            photo,
            description,
            category,
            lat,
            lon,
            address,
            geocode,
        } => {
            let coordinates = match (lat, lon) {
                (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
                _ => None,
            };
            let args = SubmitArgs {
                title,
                photo,
                description,
                category,
                coordinates,
                address,
                geocode,
            };
            run_submit(args, profile).await?;
        }
        Commands::List { json } => run_list(json, profile).await?,
        Commands::Map { json } => run_map(json, profile).await?,
        Commands::Show { id, json } => run_show(&id, json, profile).await?,
        Commands::Categories => run_categories(),
        Commands::Config { command } => run_config(command, profile)?,
        Commands::Completions { shell, output } => run_completions(shell, output.as_deref())?,
    }

    Ok(())
}

#[cfg(test)]
mod tests;
