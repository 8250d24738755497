// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ollama_probe::ProbeConfig;
use ollama_probe::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before reading any configuration
    dotenvy::dotenv().ok();

    setup_tracing();

    let cli = Cli::parse();
    let config = ProbeConfig::from_env();

    let code = ollama_probe::run(cli, config, &mut std::io::stdout(), &mut std::io::stderr()).await;
    ExitCode::from(code)
}

fn setup_tracing() {
    // RUST_LOG wins; fall back to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
