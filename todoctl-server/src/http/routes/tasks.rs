//! Task endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::db::{Task, TaskRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, Id};
use crate::http::server::AppState;
use crate::models::{NewTask, TaskPatch};

/// GET /tasks/{user_id} - list a user's tasks using their preferences
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Id(user_id): Id,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = TaskRepo::new(&state.store).list_for_user(user_id).await?;
    Ok(Json(tasks))
}

/// POST /tasks - create a task
async fn create_task(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<NewTask>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = TaskRepo::new(&state.store).create(req).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// DELETE /tasks/{id} - delete a task, returning it
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Id(id): Id,
) -> Result<Json<Task>, ApiError> {
    let task = TaskRepo::new(&state.store).delete(id).await?;
    Ok(Json(task))
}

/// PATCH /tasks/{id} - partially update a task
async fn update_task(
    State(state): State<Arc<AppState>>,
    Id(id): Id,
    ApiJson(patch): ApiJson<TaskPatch>,
) -> Result<Json<Task>, ApiError> {
    let task = TaskRepo::new(&state.store).update(id, patch).await?;
    Ok(Json(task))
}

/// Task routes
///
/// `GET /tasks/{id}` takes a user id; DELETE and PATCH take a task id.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", post(create_task))
        .route(
            "/tasks/{id}",
            get(list_tasks).delete(delete_task).patch(update_task),
        )
}
