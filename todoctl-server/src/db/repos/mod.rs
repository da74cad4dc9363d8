//! Repository implementations for database access
//!
//! Each repository borrows the shared `Store` and returns
//! `DbError::NotFound` when the addressed row does not exist.

pub mod tasks;
pub mod users;

pub use tasks::{Task, TaskRepo};
pub use users::{User, UserRepo};
