// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP reachability probe

use reqwest::{Client, Url};
use std::time::Duration;
use tokio::time::timeout;

use crate::config::ProbeConfig;
use crate::error::{AppError, Result};

use super::outcome::{ProbeOutcome, UnreachableReason};
use super::types::TagsResponse;

/// Single-shot probe against a model-serving endpoint
///
/// Issues exactly one GET per [`Prober::probe`] call. There are no retries;
/// every failure is folded into a [`ProbeOutcome`].
pub struct Prober {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl Prober {
    /// Creates a probe for the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] for an invalid URL or a zero timeout and
    /// [`AppError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let url = config.validate().map_err(AppError::Config)?;

        // Direct connection only: a proxy from the environment would
        // report a live local service as unreachable
        let client = Client::builder()
            .no_proxy()
            .connect_timeout(config.timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            client,
            url,
            timeout: config.timeout,
        })
    }

    /// Endpoint this probe queries
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Performs the request and classifies the result
    pub async fn probe(&self) -> ProbeOutcome {
        tracing::debug!("Probing {} (timeout {:?})", self.url, self.timeout);

        // The bound covers connect, response head and body together
        match timeout(self.timeout, self.fetch()).await {
            Ok(outcome) => outcome,
            Err(_) => ProbeOutcome::unreachable(
                UnreachableReason::Timeout,
                format!("no response within {:?}", self.timeout),
            ),
        }
    }

    async fn fetch(&self) -> ProbeOutcome {
        let response = match self.client.get(self.url.clone()).send().await {
            Ok(response) => response,
            Err(e) => return classify_transport_error(&e),
        };

        let status = response.status();
        tracing::trace!("Received HTTP {} from {}", status, self.url);
        if !status.is_success() {
            return ProbeOutcome::Unhealthy {
                status: status.as_u16(),
            };
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return classify_transport_error(&e),
        };

        match TagsResponse::from_slice(&body) {
            Ok(tags) => ProbeOutcome::Healthy {
                status: status.as_u16(),
                model_count: tags.model_count(),
                models: tags.model_names(),
            },
            Err(e) => ProbeOutcome::unreachable(UnreachableReason::Malformed, e.to_string()),
        }
    }
}

fn classify_transport_error(error: &reqwest::Error) -> ProbeOutcome {
    let reason = if error.is_timeout() {
        UnreachableReason::Timeout
    } else if error.is_connect() {
        UnreachableReason::Connect
    } else if error.is_decode() {
        UnreachableReason::Malformed
    } else {
        UnreachableReason::Request
    };
    ProbeOutcome::unreachable(reason, error.to_string())
}

/// Builds a [`Prober`] from `config` and runs it once
///
/// # Errors
///
/// Only configuration problems are returned; network failures are part of
/// the outcome.
pub async fn probe(config: &ProbeConfig) -> Result<ProbeOutcome> {
    let prober = Prober::new(config)?;
    Ok(prober.probe().await)
}
