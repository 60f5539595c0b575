// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Goal Tracker
//!
//! Small web service that keeps a list of goals in PostgreSQL.
//!
//! It lists, adds and removes goals over HTTP and exposes liveness and
//! Prometheus metrics endpoints.
//!
//! ## Main modules
//! - `api`: HTTP router and handlers
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: request counters and their exposition
//! - `store`: goal persistence
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod error;
mod metrics;
mod store;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, DbConfig, PoolConfig};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, GoalsView, create_router};

/// Metrics registry and path labels
pub use metrics::{MetricsRegistry, PathLabels, paths};

/// Goal record and storage backends
pub use store::{Goal, GoalStore, MemoryGoalStore, PgGoalStore};
