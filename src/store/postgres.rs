// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! PostgreSQL backend

use async_trait::async_trait;
use futures_util::{TryStream, TryStreamExt};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{Connection, Row};

use super::{Goal, GoalStore};
use crate::config::{DbConfig, PoolConfig};
use crate::error::{AppError, Result};

/// Goal store over a sqlx connection pool
#[derive(Clone)]
pub struct PgGoalStore {
    pool: PgPool,
}

impl PgGoalStore {
    /// Opens the pool and pings the database once.
    ///
    /// Either failure is reported as [`AppError::Connection`]; no retry is made.
    pub async fn connect(db: &DbConfig, pool: &PoolConfig) -> Result<Self> {
        tracing::debug!(
            "Connecting to PostgreSQL at {}:{}/{} (sslmode {:?}, max {} connections)",
            db.host,
            db.port,
            db.dbname,
            db.ssl_mode,
            pool.max_connections
        );

        let pool = PgPoolOptions::new()
            .max_connections(pool.max_connections)
            .acquire_timeout(pool.acquire_timeout)
            .connect_with(db.connect_options())
            .await
            .map_err(AppError::Connection)?;

        let store = Self { pool };
        store.ping().await?;
        Ok(store)
    }

    /// Wraps an already opened pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Liveness check against the database
    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.pool.acquire().await.map_err(AppError::Connection)?;
        conn.ping().await.map_err(AppError::Connection)
    }

    /// Closes every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn decode_goal(row: &PgRow) -> std::result::Result<Goal, sqlx::Error> {
    Ok(Goal {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

/// Drains `rows`, keeping every row `decode` accepts.
///
/// A row that fails to decode is logged and skipped; an error from the
/// stream itself ends the read.
async fn collect_decoded<S, T, F>(
    mut rows: S,
    decode: F,
) -> std::result::Result<Vec<T>, S::Error>
where
    S: TryStream + Unpin,
    F: Fn(&S::Ok) -> std::result::Result<T, sqlx::Error>,
{
    let mut out = Vec::new();
    while let Some(row) = rows.try_next().await? {
        match decode(&row) {
            Ok(item) => out.push(item),
            Err(e) => {
                tracing::warn!("Skipping goal row that failed to decode: {}", e);
            }
        }
    }
    Ok(out)
}

#[async_trait]
impl GoalStore for PgGoalStore {
    async fn list_goals(&self) -> Result<Vec<Goal>> {
        let rows = sqlx::query("SELECT id, name FROM goals").fetch(&self.pool);
        let goals = collect_decoded(rows, decode_goal)
            .await
            .map_err(AppError::Query)?;

        tracing::trace!("Loaded {} goal(s)", goals.len());
        Ok(goals)
    }

    async fn insert_goal(&self, name: &str) -> Result<()> {
        sqlx::query("INSERT INTO goals (name) VALUES ($1)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(AppError::Write)?;
        Ok(())
    }

    async fn delete_goal(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Write)?;
        if result.rows_affected() == 0 {
            tracing::debug!("Goal {} was already absent", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn decode_pair(row: &(i32, Option<&str>)) -> std::result::Result<Goal, sqlx::Error> {
        match row {
            (id, Some(name)) => Ok(Goal {
                id: *id,
                name: (*name).to_string(),
            }),
            (_, None) => Err(sqlx::Error::ColumnNotFound("name".to_string())),
        }
    }

    #[tokio::test]
    async fn test_collect_skips_rows_that_fail_to_decode() {
        let rows = stream::iter(vec![
            Ok::<_, sqlx::Error>((1, Some("first"))),
            Ok((2, None)),
            Ok((3, Some("third"))),
        ]);

        let goals = collect_decoded(rows, decode_pair).await.unwrap();

        assert_eq!(
            goals,
            vec![
                Goal {
                    id: 1,
                    name: "first".to_string()
                },
                Goal {
                    id: 3,
                    name: "third".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_collect_stops_on_stream_error() {
        let rows = stream::iter(vec![
            Ok((1, Some("first"))),
            Err(sqlx::Error::PoolTimedOut),
            Ok((3, Some("third"))),
        ]);

        let result = collect_decoded(rows, decode_pair).await;

        assert!(matches!(result, Err(sqlx::Error::PoolTimedOut)));
    }
}
