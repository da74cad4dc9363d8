//! Command implementations for todoctl CLI

pub mod seed;
pub mod serve;

pub use seed::run_seed;
pub use serve::run_serve;

use anyhow::{Context, Result};

/// Resolve the connection string from the flag or `DATABASE_URL`.
pub(crate) fn database_url(arg: Option<String>) -> Result<String> {
    arg.or_else(|| std::env::var("DATABASE_URL").ok())
        .filter(|url| !url.trim().is_empty())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or a .env file")
}
