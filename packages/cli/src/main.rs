#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for route risk assessment.
//!
//! `assess` runs the full pipeline (geocode -> route -> score -> classify)
//! for a pair of addresses and a travel window; `summary` prints the
//! dashboard-style breakdowns of the crash dataset. With no subcommand the
//! tool walks through the assessment interactively.

mod pipeline;
mod summary;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::pipeline::AssessmentParams;

#[derive(Parser)]
#[command(name = "route_risk_cli", about = "Route crash-risk assessment tool")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess the crash risk of a driving route between two addresses
    Assess {
        /// Origin address (free text)
        #[arg(long)]
        from: String,
        /// Destination address (free text)
        #[arg(long)]
        to: String,
        /// First hour of the travel window (0-23)
        #[arg(long, default_value = "0")]
        start_hour: u8,
        /// Last hour of the travel window, inclusive (0-23)
        #[arg(long, default_value = "23")]
        end_hour: u8,
        /// Path to the crash dataset CSV
        #[arg(long, default_value = "crash_data.csv")]
        data: PathBuf,
        /// Proximity threshold in degrees for a crash to count as near
        /// the route
        #[arg(long)]
        threshold: Option<f64>,
        /// Raw score treated as the top of the classification scale
        #[arg(long)]
        max_score: Option<f64>,
    },
    /// Print summary breakdowns of the crash dataset
    Summary {
        /// Path to the crash dataset CSV
        #[arg(long, default_value = "crash_data.csv")]
        data: PathBuf,
        /// Comma-separated list of counties to restrict the summary to
        #[arg(long)]
        counties: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = route_risk_cli_utils::init_logger();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Assess {
            from,
            to,
            start_hour,
            end_hour,
            data,
            threshold,
            max_score,
        }) => {
            let params = AssessmentParams {
                from_address: from,
                to_address: to,
                window: route_risk_models::TravelWindow::new(start_hour, end_hour)?,
                data_path: data,
                proximity_threshold: threshold
                    .unwrap_or(route_risk_risk::DEFAULT_PROXIMITY_THRESHOLD_DEGREES),
                max_score: max_score.unwrap_or(route_risk_risk::DEFAULT_MAX_SCORE),
            };
            pipeline::run(&multi, &params).await?;
        }
        Some(Commands::Summary { data, counties }) => {
            summary::run(&data, counties.as_deref())?;
        }
        None => pipeline::run_interactive(&multi).await?,
    }

    Ok(())
}
