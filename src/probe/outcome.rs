// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Classified result of a single probe

use std::fmt;

/// Why the service could not be considered reachable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnreachableReason {
    /// TCP connection refused or host not resolvable
    Connect,
    /// Nothing arrived within the configured bound
    Timeout,
    /// Success status but the body is not the expected JSON
    Malformed,
    /// Any other transport failure
    Request,
}

impl fmt::Display for UnreachableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UnreachableReason::Connect => "connection failed",
            UnreachableReason::Timeout => "timed out",
            UnreachableReason::Malformed => "malformed response",
            UnreachableReason::Request => "request failed",
        };
        f.write_str(text)
    }
}

/// One of the three outcomes a probe can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Success status and a parseable payload
    Healthy {
        status: u16,
        model_count: usize,
        models: Vec<String>,
    },
    /// The service answered with a non-success status
    Unhealthy { status: u16 },
    /// Network failure, timeout or malformed response
    Unreachable {
        reason: UnreachableReason,
        detail: String,
    },
}

impl ProbeOutcome {
    pub(crate) fn unreachable(reason: UnreachableReason, detail: impl Into<String>) -> Self {
        ProbeOutcome::Unreachable {
            reason,
            detail: detail.into(),
        }
    }

    /// True only when the service is reachable and healthy
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeOutcome::Healthy { .. })
    }

    /// Process exit code: 0 when available, 1 otherwise
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.is_available() { 0 } else { 1 }
    }

    /// Emits the outcome through `tracing`
    pub fn log(&self, url: &str) {
        match self {
            ProbeOutcome::Healthy {
                status,
                model_count,
                models,
            } => {
                tracing::info!(
                    url,
                    status,
                    model_count,
                    "Service is available with {} model(s)",
                    model_count
                );
                for name in models {
                    tracing::debug!("  - {}", name);
                }
            }
            ProbeOutcome::Unhealthy { status } => {
                tracing::warn!(url, status, "Service responded with HTTP {}", status);
            }
            ProbeOutcome::Unreachable { reason, detail } => {
                tracing::error!(url, "Service is unreachable: {}: {}", reason, detail);
            }
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Healthy {
                status,
                model_count,
                ..
            } => write!(f, "available (HTTP {status}, {model_count} model(s))"),
            ProbeOutcome::Unhealthy { status } => write!(f, "not available (HTTP {status})"),
            ProbeOutcome::Unreachable { reason, detail } => {
                write!(f, "not available ({reason}: {detail})")
            }
        }
    }
}
