// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Counter increments called from the request handlers

use crate::metrics::labels::PathLabels;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub fn record_goal_added(&self) {
        self.goals_added.inc();
    }

    pub fn record_goal_removed(&self) {
        self.goals_removed.inc();
    }

    pub fn record_request(&self, path: &str) {
        self.requests.get_or_create(&PathLabels::new(path)).inc();
    }
}
