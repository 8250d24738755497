// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Build configuration record for the front-end bundler
//!
//! The record is pure data: alias mappings, output directory, target
//! environment and dev server port. The bundler reads it as JSON with
//! camelCase keys; nothing here performs a build.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{AppError, Result};


/// Values of the built-in record
pub mod defaults {
    pub const ALIASES: &[(&str, &str)] = &[
        ("@", "./src"),
        ("@core", "./src/core"),
        ("@ai", "./src/ai"),
        ("@systems", "./src/systems"),
    ];
    pub const OUT_DIR: &str = "dist";
    pub const TARGET: &str = "esnext";
    pub const DEV_SERVER_PORT: u16 = 3000;
    pub const MINIFY: bool = true;
    pub const SOURCEMAP: bool = false;
}

/// Static record consumed by the external bundler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub aliases: BTreeMap<String, String>,
    pub out_dir: String,
    pub target: String,
    pub dev_server_port: u16,
    #[serde(default = "default_minify")]
    pub minify: bool,
    #[serde(default)]
    pub sourcemap: bool,
}

fn default_minify() -> bool {
    defaults::MINIFY
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            aliases: defaults::ALIASES
                .iter()
                .map(|(alias, path)| ((*alias).to_string(), (*path).to_string()))
                .collect(),
            out_dir: defaults::OUT_DIR.to_string(),
            target: defaults::TARGET.to_string(),
            dev_server_port: defaults::DEV_SERVER_PORT,
            minify: defaults::MINIFY,
            sourcemap: defaults::SOURCEMAP,
        }
    }
}

impl BuildConfig {
    /// Literal path declared for `alias`
    #[must_use]
    pub fn alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Rewrites an import specifier through the alias table
    ///
    /// An alias matches only the whole specifier or its leading segment
    /// followed by `/`; the longest matching alias wins.
    #[must_use]
    pub fn resolve(&self, specifier: &str) -> Option<String> {
        self.aliases
            .iter()
            .filter_map(|(alias, path)| {
                if specifier == alias {
                    Some((alias.len(), path.clone()))
                } else {
                    specifier
                        .strip_prefix(alias.as_str())
                        .and_then(|rest| rest.strip_prefix('/'))
                        .map(|rest| (alias.len(), join_path(path, rest)))
                }
            })
            .max_by_key(|(len, _)| *len)
            .map(|(_, resolved)| resolved)
    }

    /// Checks key-value correctness of the record
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (alias, path) in &self.aliases {
            if !alias.starts_with('@') {
                return Err(format!("Alias '{}' must start with '@'", alias));
            }
            if alias.len() > 1 && alias.ends_with('/') {
                return Err(format!("Alias '{}' must not end with '/'", alias));
            }
            if path.trim().is_empty() {
                return Err(format!("Alias '{}' maps to an empty path", alias));
            }
        }

        if self.out_dir.trim().is_empty() {
            return Err("Output directory cannot be empty".to_string());
        }

        if self.target.trim().is_empty() {
            return Err("Build target cannot be empty".to_string());
        }

        if self.dev_server_port == 0 {
            return Err("Dev server port must be non-zero".to_string());
        }

        Ok(())
    }

    /// Parses and validates a record from JSON
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Json`] for malformed JSON and [`AppError::Config`]
    /// when the record fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BuildConfig = serde_json::from_str(json)?;
        config.validate().map_err(AppError::Config)?;
        Ok(config)
    }

    /// Reads a record from a JSON file
    ///
    /// # Errors
    ///
    /// Propagates I/O, parse and validation errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading build configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serializes the record for the bundler
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn join_path(base: &str, rest: &str) -> String {
    if rest.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), rest)
    }
}
