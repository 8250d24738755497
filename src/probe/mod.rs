// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Reachability probe for a local model-serving service

mod client;
mod outcome;
mod types;

pub use client::{Prober, probe};
pub use outcome::{ProbeOutcome, UnreachableReason};
pub use types::{ModelEntry, TagsResponse};
