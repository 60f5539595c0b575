// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! In-memory backend

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Goal, GoalStore};
use crate::error::{AppError, Result};

#[derive(Default)]
struct Inner {
    goals: BTreeMap<i32, String>,
    last_id: i32,
}

/// Goal store kept in process memory
///
/// Ids come from a sequence that never hands out the same value twice,
/// like a `GENERATED` identity column.
#[derive(Default)]
pub struct MemoryGoalStore {
    inner: Mutex<Inner>,
}

impl MemoryGoalStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored goals
    pub async fn len(&self) -> usize {
        self.inner.lock().await.goals.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl GoalStore for MemoryGoalStore {
    async fn list_goals(&self) -> Result<Vec<Goal>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .goals
            .iter()
            .map(|(id, name)| Goal {
                id: *id,
                name: name.clone(),
            })
            .collect())
    }

    async fn insert_goal(&self, name: &str) -> Result<()> {
        let mut inner = self.inner.lock().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or(AppError::SequenceExhausted)?;
        inner.last_id = id;
        inner.goals.insert(id, name.to_string());
        Ok(())
    }

    async fn delete_goal(&self, id: i32) -> Result<()> {
        self.inner.lock().await.goals.remove(&id);
        Ok(())
    }
}
