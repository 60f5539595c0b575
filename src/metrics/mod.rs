// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry for the goal tracker
//!
//! Holds the request counters and encodes them for the `/metrics` scrape.

mod labels;
mod registry;


/// Path label type and its known values
pub use labels::{PathLabels, paths};

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
