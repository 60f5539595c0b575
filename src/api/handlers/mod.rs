// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod goals;
mod health;
mod metrics;

pub use goals::{add_goal, list_goals, remove_goal};
pub use health::health_check;
pub use metrics::metrics_handler;
