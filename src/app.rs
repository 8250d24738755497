// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Command dispatch
//!
//! Every command reports through `out` on success and `err` on failure and
//! yields the process exit code.

use std::io::Write;
use std::path::PathBuf;

use crate::build::BuildConfig;
use crate::cli::{Cli, Command, ProbeArgs};
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::probe::Prober;

/// Runs the parsed command line; returns 0 on success and 1 otherwise
pub async fn run<O, E>(cli: Cli, config: ProbeConfig, out: &mut O, err: &mut E) -> u8
where
    O: Write,
    E: Write,
{
    match dispatch(cli, config, out, err).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{}", e);
            let _ = writeln!(err, "error: {}", e);
            1
        }
    }
}

async fn dispatch<O, E>(cli: Cli, config: ProbeConfig, out: &mut O, err: &mut E) -> Result<u8>
where
    O: Write,
    E: Write,
{
    match cli.command.unwrap_or(Command::Probe(ProbeArgs::default())) {
        Command::Probe(args) => run_probe(args.apply(config), out, err).await,
        Command::BuildConfig { file } => {
            let record = load_build_config(file.or(config.build_config_path))?;
            writeln!(out, "{}", record.to_json_pretty()?)?;
            Ok(0)
        }
        Command::Resolve { specifier, file } => {
            let record = load_build_config(file.or(config.build_config_path))?;
            match record.resolve(&specifier) {
                Some(path) => {
                    writeln!(out, "{}", path)?;
                    Ok(0)
                }
                None => {
                    tracing::warn!("No alias matches '{}'", specifier);
                    writeln!(err, "no alias matches '{}'", specifier)?;
                    Ok(1)
                }
            }
        }
    }
}

async fn run_probe<O, E>(config: ProbeConfig, out: &mut O, err: &mut E) -> Result<u8>
where
    O: Write,
    E: Write,
{
    let prober = Prober::new(&config)?;
    tracing::info!("Checking service at {}", prober.url());

    let outcome = prober.probe().await;
    outcome.log(prober.url());

    if outcome.is_available() {
        writeln!(out, "{}: {}", prober.url(), outcome)?;
    } else {
        writeln!(err, "{}: {}", prober.url(), outcome)?;
    }

    Ok(outcome.exit_code())
}

fn load_build_config(file: Option<PathBuf>) -> Result<BuildConfig> {
    match file {
        Some(path) => BuildConfig::load(path),
        None => Ok(BuildConfig::default()),
    }
}
