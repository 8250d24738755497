// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the probe application

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Build configuration record could not be parsed or serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
