mod cli;
mod commands;
mod config;
mod controller;
mod errors;
mod gateway;
mod input;
mod models;
mod render;
mod report;
mod store;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands};
use crate::commands::Frontend;
use crate::config::Config;
use crate::controller::ViewController;
use crate::gateway::HttpAnalysisGateway;
use crate::render::console::ConsoleOptions;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report view.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting resume analysis client v{}", env!("CARGO_PKG_VERSION"));

    let server = cli.server.clone().unwrap_or_else(|| config.analyzer_url.clone());
    let export_dir = cli.export_dir.clone().unwrap_or_else(|| config.export_dir.clone());
    let options = ConsoleOptions {
        color: !cli.no_color,
    };

    let gateway = HttpAnalysisGateway::new(&server, config.request_timeout)
        .context("Failed to build HTTP client")?;
    info!("Analysis service: {server}");
    let mut frontend = Frontend::new(ViewController::new(Arc::new(gateway)), export_dir, options);

    let succeeded = match cli.command {
        Commands::Analyze {
            file,
            text,
            export,
            json,
        } => frontend.analyze(file, text, export, json).await?,
        Commands::Render { result, export } => frontend.render(&result, export).await,
        Commands::Session => frontend.session().await?,
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
