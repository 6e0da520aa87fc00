//! Downtime Sentinel
//!
//! Validates sensor CSV datasets, trains an equipment downtime classifier and
//! serves predictions from the command line or an interactive session.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use downtime_sentinel::config::ServiceConfig;
use downtime_sentinel::lifecycle::LifecycleCoordinator;
use downtime_sentinel::logging;
use downtime_sentinel::service::{
    DowntimeService, ErrorResponse, PredictRequest, TrainRequest, UploadResponse, request_schemas,
};
use downtime_sentinel::ui::cli::drivers::InquireDriver;
use downtime_sentinel::ui::cli::run_session;
use serde::Serialize;
use tracing::debug;

#[derive(Parser)]
#[command(name = "downtime-sentinel")]
#[command(about = "Train and serve an equipment downtime classifier")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true, env = "DOWNTIME_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a CSV dataset and store it in the upload directory
    Upload {
        /// Path to the .csv file
        file: PathBuf,
    },

    /// Upload a CSV dataset, then train and persist a model on it
    Train {
        /// Path to the .csv file
        file: PathBuf,

        /// logistic_regression (default) or decision_tree
        #[arg(short, long)]
        model_type: Option<String>,
    },

    /// Predict downtime for one reading with the persisted model
    Predict {
        #[arg(long)]
        temperature: f64,

        #[arg(long)]
        run_time: f64,
    },

    /// Show the feature columns and the active model
    Status,

    /// Print JSON Schemas of the request bodies
    Schema,

    /// Menu-driven session (default)
    Interactive,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = ServiceConfig::load(cli.config.as_deref()).context("invalid configuration")?;
    logging::init(&config.log_filter);
    debug!(?config, "configuration loaded");

    let service = DowntimeService::new(Arc::new(LifecycleCoordinator::from_config(&config)));

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Upload { file } => {
            let response = upload_file(&service, &file)?;
            respond(response)
        }
        Commands::Train { file, model_type } => match upload_file(&service, &file)? {
            Ok(uploaded) => respond(service.train(&TrainRequest {
                file_path: uploaded.file_path,
                model_type,
            })),
            Err(e) => respond::<UploadResponse>(Err(e)),
        },
        Commands::Predict {
            temperature,
            run_time,
        } => respond(service.predict(&PredictRequest {
            temperature,
            run_time,
        })),
        Commands::Status => {
            print_json(&service.status())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Schema => {
            print_json(&request_schemas())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Interactive => {
            run_session(&InquireDriver, &service, &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn upload_file(
    service: &DowntimeService,
    file: &Path,
) -> Result<std::result::Result<UploadResponse, ErrorResponse>> {
    let bytes = fs::read(file).with_context(|| format!("cannot read {}", file.display()))?;
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(service.upload_bytes(&filename, &bytes))
}

fn respond<T: Serialize>(response: std::result::Result<T, ErrorResponse>) -> Result<ExitCode> {
    match response {
        Ok(body) => {
            print_json(&body)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            print_json(&error)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_json<T: Serialize>(body: &T) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, body)?;
    writeln!(out)?;
    Ok(())
}
