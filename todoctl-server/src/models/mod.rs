//! Domain models shared by the repositories and the HTTP layer
//!
//! Partial updates are converted to ordered `(column, value)` lists here,
//! so column names never come from request input.

pub mod validation;
pub mod preference;
pub mod task;
pub mod user;

pub use validation::ValidationError;
pub use preference::{Preference, Preferences};
pub use task::{NewTask, TaskPatch};
pub use user::UserPatch;
