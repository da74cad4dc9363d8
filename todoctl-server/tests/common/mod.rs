//! Shared helpers for database-backed tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p todoctl-server -- --ignored

#![allow(dead_code)]

use chrono::NaiveDate;
use todoctl_server::db::{Store, User};

const SCHEMA: &str = include_str!("../fixtures/schema.sql");

/// Connect and make sure the tables exist.
pub async fn store() -> Store {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let store = Store::connect(&url).await.expect("pool creation failed");
    sqlx::raw_sql(SCHEMA)
        .execute(store.pool())
        .await
        .expect("schema setup failed");
    store
}

/// Insert a fresh user so tests never share rows.
pub async fn user(store: &Store, sort: bool, filter: bool) -> User {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (name, sort, filter) VALUES ($1, $2, $3) RETURNING id, name, sort, filter",
    )
    .bind("test-user")
    .bind(sort)
    .bind(filter)
    .fetch_one(store.pool())
    .await
    .expect("user insert failed")
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}
