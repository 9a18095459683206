// ABOUTME: Calorie CLI - command-line front end for the calorie calculator
// ABOUTME: Calculates and persists daily calorie targets and shows the stored calculation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Calculate and save targets
//! calorie-cli calculate --gender male --age 30 --height 180 --weight 80 \
//!     --activity-level moderately_active --goal maintain_weight
//!
//! # Show the saved calculation as JSON
//! calorie-cli show --json
//!
//! # Use a throwaway in-memory store
//! calorie-cli --memory calculate ...
//!
//! # Remove the saved calculation
//! calorie-cli clear
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use calorie_tracker::{
    config::{CalculatorConfig, StorageBackend},
    constants::service_names,
    logging::{CalculationLogger, LoggingConfig},
    models::{ActivityData, ActivityLevel, BasicData, CalorieCalculationData, Gender, Goal},
    services::CalorieService,
    storage::KeyValueStore,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = service_names::CALORIE_CLI,
    about = "Daily calorie and macronutrient calculator",
    long_about = "Calculates BMR, TDEE, a goal-adjusted calorie target and a macronutrient split, and keeps the latest calculation on disk."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the saved calculation (overrides `CALORIE_STORAGE_DIR`)
    #[arg(long, global = true, conflicts_with = "memory")]
    storage_dir: Option<PathBuf>,

    /// Keep the calculation in memory only
    #[arg(long, global = true)]
    memory: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate daily targets and save them
    Calculate {
        /// Biological sex used by the BMR formula (male, female)
        #[arg(long)]
        gender: Gender,

        /// Age in years (10-120)
        #[arg(long)]
        age: u32,

        /// Height in centimetres (100-250)
        #[arg(long)]
        height: f64,

        /// Weight in kilograms (30-300)
        #[arg(long)]
        weight: f64,

        /// Activity level (sedentary, lightly_active, moderately_active, very_active, extremely_active)
        #[arg(long)]
        activity_level: ActivityLevel,

        /// Goal (lose_weight, maintain_weight, gain_weight)
        #[arg(long)]
        goal: Goal,

        /// Print the saved record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the saved calculation
    Show {
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove the saved calculation
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = CalculatorConfig::load()?;
    if cli.memory {
        config.storage.backend = StorageBackend::Memory;
    } else if let Some(dir) = cli.storage_dir {
        config.storage.backend = StorageBackend::File;
        config.storage.data_dir = dir;
    }

    let location = match config.storage.backend {
        StorageBackend::Memory => "process memory".to_owned(),
        StorageBackend::File => config.storage.data_dir.display().to_string(),
    };
    CalculationLogger::log_storage_backend(&config.storage.backend.to_string(), &location);

    let service = CalorieService::from_config(&config);
    if let Err(e) = service.repository().store().health_check().await {
        warn!(error = %e, "Storage is unavailable, calculations will not be saved");
    }

    match cli.command {
        Command::Calculate {
            gender,
            age,
            height,
            weight,
            activity_level,
            goal,
            json,
        } => {
            let data = CalorieCalculationData::new(
                BasicData {
                    gender,
                    age,
                    height_cm: height,
                    weight_kg: weight,
                },
                ActivityData {
                    activity_level,
                    goal,
                },
            );
            commands::calculate::run(&service, data, json).await?;
        }
        Command::Show { json } => commands::show::run(&service, json).await?,
        Command::Clear => commands::show::clear(&service).await?,
    }

    Ok(())
}
