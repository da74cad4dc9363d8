//! Route handlers organized by resource

pub mod health;
pub mod tasks;
pub mod users;
