// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Scrape encoding and read accessors

use crate::error::{AppError, Result};
use crate::metrics::labels::PathLabels;
use prometheus_client::encoding::text::encode;

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Encodes every registered metric in OpenMetrics text format
    pub fn encode_metrics(&self) -> Result<String> {
        let mut buffer = String::new();
        encode(&mut buffer, &self.registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }

    pub fn goals_added(&self) -> u64 {
        self.goals_added.get()
    }

    pub fn goals_removed(&self) -> u64 {
        self.goals_removed.get()
    }

    /// Request count for one path label
    pub fn requests(&self, path: &str) -> u64 {
        self.requests
            .get(&PathLabels::new(path))
            .map_or(0, |counter| counter.get())
    }
}
