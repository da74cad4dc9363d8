//! Task repository
//!
//! - list: preference-shaped WHERE/ORDER BY per user
//! - update/delete: single statement with RETURNING, missing row is NotFound

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::pool::Store;
use crate::db::query::{build_filter_order, build_set_clause, Fragment, SqlParam};
use crate::models::{NewTask, TaskPatch};
use crate::db::error::DbError;
use super::UserRepo;

const TASK_COLUMNS: &str = "id, user_id, value, due_date, status";

/// Task record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub user_id: i32,
    pub value: String,
    pub due_date: NaiveDate,
    pub status: bool,
}

/// Task repository
pub struct TaskRepo<'a> {
    store: &'a Store,
}

impl<'a> TaskRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List a user's tasks, shaped by their sort/filter preferences.
    ///
    /// Returns NotFound when the user has no row; preferences are never
    /// defaulted.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Task>, DbError> {
        let prefs = UserRepo::new(self.store).preferences(user_id).await?;
        let suffix = build_filter_order(prefs);

        let mut params = vec![SqlParam::Int(user_id)];
        params.extend(suffix.params);
        let fragment = Fragment::new(
            format!("SELECT {TASK_COLUMNS} FROM tasks WHERE user_id=$1{}", suffix.text),
            params,
        );

        Ok(self.store.query(&fragment).await?)
    }

    /// Insert a task and return it with its generated id.
    pub async fn create(&self, task: NewTask) -> Result<Task, DbError> {
        let fragment = Fragment::new(
            format!(
                "INSERT INTO tasks (user_id, value, due_date, status) VALUES ($1, $2, $3, $4) RETURNING {TASK_COLUMNS}"
            ),
            vec![
                task.user_id.into(),
                task.value.into(),
                task.due_date.into(),
                task.status.into(),
            ],
        );

        let created: Task = self
            .store
            .query(&fragment)
            .await?
            .into_iter()
            .next()
            .ok_or(sqlx::Error::RowNotFound)?;
        tracing::debug!(task_id = created.id, user_id = created.user_id, "task created");
        Ok(created)
    }

    /// Get a single task by ID.
    pub async fn get(&self, id: i32) -> Result<Task, DbError> {
        let fragment = Fragment::new(
            format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id=$1"),
            vec![id.into()],
        );
        self.fetch_one(&fragment, id).await
    }

    /// Delete a task, returning the row image from the DELETE itself.
    ///
    /// Deleting an id that is already gone is NotFound, not a failure.
    pub async fn delete(&self, id: i32) -> Result<Task, DbError> {
        let fragment = Fragment::new(
            format!("DELETE FROM tasks WHERE id=$1 RETURNING {TASK_COLUMNS}"),
            vec![id.into()],
        );
        self.fetch_one(&fragment, id).await
    }

    /// Apply a partial update.
    ///
    /// An empty patch fails with `DbError::Query` before anything is sent.
    pub async fn update(&self, id: i32, patch: TaskPatch) -> Result<Task, DbError> {
        let set = build_set_clause(patch.into_fields(), id)?;
        let fragment = Fragment::new(
            format!("UPDATE tasks {} RETURNING {TASK_COLUMNS}", set.text),
            set.params,
        );
        self.fetch_one(&fragment, id).await
    }

    async fn fetch_one(&self, fragment: &Fragment, id: i32) -> Result<Task, DbError> {
        self.store
            .query(fragment)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DbError::not_found("task", id))
    }
}
