//! User endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use crate::db::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, Id};
use crate::http::server::AppState;
use crate::models::{Preference, UserPatch};

/// Preference toggle body. Extra keys are refused so a toggle never
/// silently swallows field updates.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToggleRequest {
    pub option: Preference,
}

/// PATCH /users/{id} body: either a preference toggle or field updates
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UserUpdateRequest {
    Toggle(ToggleRequest),
    Fields(UserPatch),
}

/// GET /users - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.store).list().await?;
    Ok(Json(users))
}

/// GET /users/{id} - get a single user
async fn get_user(State(state): State<Arc<AppState>>, Id(id): Id) -> Result<Json<User>, ApiError> {
    let user = UserRepo::new(&state.store).get(id).await?;
    Ok(Json(user))
}

/// PATCH /users/{id} - toggle a preference or update fields
async fn update_user(
    State(state): State<Arc<AppState>>,
    Id(id): Id,
    ApiJson(req): ApiJson<UserUpdateRequest>,
) -> Result<Json<User>, ApiError> {
    let repo = UserRepo::new(&state.store);
    let user = match req {
        UserUpdateRequest::Toggle(ToggleRequest { option }) => {
            repo.toggle_preference(option, id).await?
        }
        UserUpdateRequest::Fields(patch) => repo.update(id, patch).await?,
    };
    Ok(Json(user))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/{id}", get(get_user).patch(update_user))
}
