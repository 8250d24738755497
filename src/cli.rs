// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Command line surface

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::ProbeConfig;

/// Diagnostics for a local model-serving service and the front-end build record
#[derive(Debug, Parser)]
#[command(name = "ollama-probe", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the service answers on its model listing endpoint (default)
    Probe(ProbeArgs),
    /// Print the build configuration record as JSON
    BuildConfig {
        /// JSON file to load instead of the built-in record
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Resolve an aliased import specifier to its path
    Resolve {
        /// Specifier such as `@core/engine`
        specifier: String,
        /// JSON file to load instead of the built-in record
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Default, clap::Args)]
pub struct ProbeArgs {
    /// Endpoint to query (overrides PROBE_URL)
    #[arg(long)]
    pub url: Option<String>,
    /// Timeout in seconds (overrides PROBE_TIMEOUT_SECONDS)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl ProbeArgs {
    /// Applies command line overrides on top of the environment configuration
    #[must_use]
    pub fn apply(&self, mut config: ProbeConfig) -> ProbeConfig {
        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}
