//! Database layer - store handle, query builders and repositories
//!
//! # Design Principles
//!
//! - One pooled `Store` passed down explicitly, no module-level client
//! - Absence is `DbError::NotFound`, distinct from store failures
//! - Writes are single statements with RETURNING, no check-then-write

pub mod error;
pub mod pool;
pub mod query;
pub mod repos;

pub use error::DbError;
pub use pool::Store;
pub use repos::*;
