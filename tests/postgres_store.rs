// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Runs against a real database:
//! `DATABASE_URL=postgres://... cargo test -- --ignored --test-threads=1`

use goal_tracker::{GoalStore, PgGoalStore};
use sqlx::postgres::PgPoolOptions;

async fn fresh_store() -> PgGoalStore {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS goals (
            id integer PRIMARY KEY GENERATED ALWAYS AS IDENTITY,
            name text
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("DELETE FROM goals").execute(&pool).await.unwrap();

    PgGoalStore::from_pool(pool)
}

#[tokio::test]
#[ignore = "needs a PostgreSQL instance at DATABASE_URL"]
async fn postgres_store_round_trip() {
    let store = fresh_store().await;
    store.ping().await.unwrap();

    store.insert_goal("Buy milk").await.unwrap();
    store.insert_goal("Robert'); DROP TABLE goals;--").await.unwrap();

    let goals = store.list_goals().await.unwrap();
    assert_eq!(goals.len(), 2);
    let milk = goals.iter().find(|g| g.name == "Buy milk").unwrap();

    store.delete_goal(milk.id).await.unwrap();
    // Second delete of the same id is a silent no-op.
    store.delete_goal(milk.id).await.unwrap();

    let goals = store.list_goals().await.unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].name, "Robert'); DROP TABLE goals;--");

    store.close().await;
}

#[tokio::test]
#[ignore = "needs a PostgreSQL instance at DATABASE_URL"]
async fn postgres_store_skips_rows_that_fail_to_decode() {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let store = fresh_store().await;
    store.insert_goal("valid").await.unwrap();

    let pool = PgPoolOptions::new().connect(&url).await.unwrap();
    sqlx::query("INSERT INTO goals (name) VALUES (NULL)")
        .execute(&pool)
        .await
        .unwrap();

    let goals = store.list_goals().await.unwrap();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].name, "valid");

    store.close().await;
}
