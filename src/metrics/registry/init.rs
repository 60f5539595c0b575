// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and metric registration

use crate::metrics::labels::PathLabels;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::registry::Registry;
use std::sync::Arc;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        // Counters get the `_total` suffix from the encoder.
        let goals_added = Counter::default();
        registry.register(
            "goals_added",
            "Total number of goals added",
            goals_added.clone(),
        );
        let goals_removed = Counter::default();
        registry.register(
            "goals_removed",
            "Total number of goals removed",
            goals_removed.clone(),
        );
        let requests = Family::<PathLabels, Counter>::default();
        registry.register(
            "requests",
            "Total number of HTTP requests by path",
            requests.clone(),
        );

        Self {
            registry: Arc::new(registry),
            goals_added,
            goals_removed,
            requests,
        }
    }
}
