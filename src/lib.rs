// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Ollama Probe
//!
//! Reachability probe for a local model-serving service, plus the static
//! build configuration record of the front-end application that uses it.
//!
//! ## Main modules
//! - `app`: command dispatch and exit codes
//! - `build`: build configuration record (aliases, output, dev server port)
//! - `cli`: command line arguments
//! - `config`: probe configuration from the environment
//! - `error`: error types
//! - `probe`: single-shot HTTP reachability probe
//! - `prelude`: commonly used types

mod app;
pub mod build;
pub mod cli;
mod config;
mod error;
mod probe;
pub mod prelude;

/// Probe configuration
pub use config::ProbeConfig;

/// Application error and result type
pub use error::{AppError, Result};

/// Reachability probe and its outcome
pub use probe::{ModelEntry, ProbeOutcome, Prober, TagsResponse, UnreachableReason, probe};

/// Build configuration record
pub use build::BuildConfig;

/// Command dispatch
pub use app::run;
