//! todoctl-server: multi-user to-do list backend
//!
//! Per-user task lists in PostgreSQL, exposed over HTTP. Each user
//! carries two display preferences (sort by due date, hide completed)
//! that shape how their task list is queried.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, Store};
pub use http::{run_server, ServerConfig};
