// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Wire types for the model listing endpoint

use serde::Deserialize;

/// Body of `GET /api/tags`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsResponse {
    #[serde(default)]
    pub models: Option<Vec<ModelEntry>>,
}

/// A single installed model as reported by the service
#[derive(Debug, Clone, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub digest: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
}

impl TagsResponse {
    /// Parses a response body, which must be a JSON object
    ///
    /// # Errors
    ///
    /// Returns an error for invalid JSON, a non-object top level value or
    /// a `models` collection of the wrong shape.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        if !value.is_object() {
            return Err(serde::de::Error::custom("expected a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// Number of listed models; a missing collection counts as zero
    #[must_use]
    pub fn model_count(&self) -> usize {
        self.models.as_ref().map_or(0, Vec::len)
    }

    /// Names of the listed models, in response order
    #[must_use]
    pub fn model_names(&self) -> Vec<String> {
        self.models
            .iter()
            .flatten()
            .map(|m| m.name.clone())
            .collect()
    }
}
