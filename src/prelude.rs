// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use goal_tracker::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, DbConfig, PoolConfig};
pub use crate::error::{AppError, Result};

// HTTP
pub use crate::api::{AppState, GoalsView, create_router};

// Metrics types
pub use crate::metrics::{MetricsRegistry, PathLabels, paths};

// Storage
pub use crate::store::{Goal, GoalStore, MemoryGoalStore, PgGoalStore};
