// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the probe application
//!
//! Loads probe settings from environment variables (and `.env`).

use std::path::PathBuf;
use std::time::Duration;


/// Default configuration values
pub mod defaults {
    pub const PROBE_URL: &str = "http://localhost:11434/api/tags";
    pub const PROBE_TIMEOUT_SECONDS: u64 = 5;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PROBE_URL: &str = "PROBE_URL";
    pub const PROBE_TIMEOUT_SECONDS: &str = "PROBE_TIMEOUT_SECONDS";
    pub const BUILD_CONFIG: &str = "BUILD_CONFIG";
}

/// Settings for a single reachability probe
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Endpoint queried with a single GET
    pub url: String,
    /// Upper bound for connect, response and body together
    pub timeout: Duration,
    /// Optional JSON file overriding the built-in build record
    pub build_config_path: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            url: defaults::PROBE_URL.to_string(),
            timeout: Duration::from_secs(defaults::PROBE_TIMEOUT_SECONDS),
            build_config_path: None,
        }
    }
}

impl ProbeConfig {
    /// Loads configuration from environment variables
    ///
    /// `.env` is expected to be loaded by the caller beforehand.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(env_vars::PROBE_URL).unwrap_or_else(|| defaults::PROBE_URL.to_string());

        let timeout_secs = match lookup(env_vars::PROBE_TIMEOUT_SECONDS) {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|e| {
                tracing::warn!(
                    "Failed to parse {}='{}': {}. Using {}s.",
                    env_vars::PROBE_TIMEOUT_SECONDS,
                    raw,
                    e,
                    defaults::PROBE_TIMEOUT_SECONDS
                );
                defaults::PROBE_TIMEOUT_SECONDS
            }),
            None => defaults::PROBE_TIMEOUT_SECONDS,
        };

        let build_config_path = lookup(env_vars::BUILD_CONFIG)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        ProbeConfig {
            url,
            timeout: Duration::from_secs(timeout_secs),
            build_config_path,
        }
    }

    /// Validates probe configuration, returning the parsed endpoint
    pub fn validate(&self) -> Result<reqwest::Url, String> {
        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| format!("Invalid probe URL '{}': {}", self.url, e))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Unsupported scheme '{}' in probe URL: expected http or https",
                url.scheme()
            ));
        }

        if self.timeout.is_zero() {
            return Err("Probe timeout must be greater than zero".to_string());
        }

        Ok(url)
    }
}
