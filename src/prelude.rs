// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use ollama_probe::prelude::*;
//! ```

pub use crate::build::BuildConfig;
pub use crate::config::ProbeConfig;
pub use crate::error::{AppError, Result};
pub use crate::probe::{ProbeOutcome, Prober, UnreachableReason};
