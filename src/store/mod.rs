// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Persistence adapter for the `goals` relation
//!
//! Handlers talk to storage through [`GoalStore`]. The production backend is
//! [`PgGoalStore`]; [`MemoryGoalStore`] has the same semantics without a
//! database and backs the tests and local runs.

mod memory;
mod postgres;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

pub use memory::MemoryGoalStore;
pub use postgres::PgGoalStore;

/// A persisted goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goal {
    pub id: i32,
    pub name: String,
}

/// Storage operations on the goals relation
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Returns every goal in storage order. Rows that fail to decode are skipped.
    async fn list_goals(&self) -> Result<Vec<Goal>>;

    /// Inserts a goal; the store assigns its id.
    async fn insert_goal(&self, name: &str) -> Result<()>;

    /// Deletes the goal with `id`. Deleting an absent id is not an error.
    async fn delete_goal(&self, id: i32) -> Result<()>;
}
