// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update logic

mod init;
mod scrape;
mod update;

use crate::metrics::labels::PathLabels;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::registry::Registry;
use std::sync::Arc;

/// Process-wide request counters
///
/// Built once at startup and handed to the handlers through `AppState`.
/// Clones share the same underlying counters.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Registry>,
    goals_added: Counter,
    goals_removed: Counter,
    requests: Family<PathLabels, Counter>,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
