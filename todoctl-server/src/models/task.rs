//! Task request bodies

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::query::SqlParam;

/// Task as submitted for creation (no id yet)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub user_id: i32,
    pub value: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: bool,
}

/// Partial task update. `id` and `user_id` are immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskPatch {
    pub value: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<bool>,
}

impl TaskPatch {
    /// Present fields as `(column, value)` pairs in column order.
    pub fn into_fields(self) -> Vec<(&'static str, SqlParam)> {
        let mut fields = Vec::new();
        if let Some(value) = self.value {
            fields.push(("value", value.into()));
        }
        if let Some(due_date) = self.due_date {
            fields.push(("due_date", due_date.into()));
        }
        if let Some(status) = self.status {
            fields.push(("status", status.into()));
        }
        fields
    }
}
