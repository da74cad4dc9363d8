//! User repository

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::pool::Store;
use crate::db::query::{build_set_clause, Fragment};
use crate::models::{Preference, Preferences, UserPatch};
use crate::db::error::DbError;

const USER_COLUMNS: &str = "id, name, sort, filter";

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub sort: bool,
    pub filter: bool,
}

impl User {
    pub fn preferences(&self) -> Preferences {
        Preferences {
            sort: self.sort,
            filter: self.filter,
        }
    }
}

/// User repository
pub struct UserRepo<'a> {
    store: &'a Store,
}

impl<'a> UserRepo<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all users.
    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let fragment = Fragment::new(format!("SELECT {USER_COLUMNS} FROM users"), Vec::new());
        Ok(self.store.query(&fragment).await?)
    }

    /// Get a single user by ID.
    pub async fn get(&self, id: i32) -> Result<User, DbError> {
        let fragment = Fragment::new(
            format!("SELECT {USER_COLUMNS} FROM users WHERE id=$1"),
            vec![id.into()],
        );
        self.fetch_one(&fragment, id).await
    }

    /// Read one preference from the full user row.
    pub async fn preference(&self, preference: Preference, id: i32) -> Result<bool, DbError> {
        let user = self.get(id).await?;
        Ok(preference.pick(user.preferences()))
    }

    /// Read both preferences, as needed to shape a task listing.
    pub async fn preferences(&self, id: i32) -> Result<Preferences, DbError> {
        let fragment = Fragment::new("SELECT sort, filter FROM users WHERE id=$1", vec![id.into()]);
        self.store
            .query::<Preferences>(&fragment)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DbError::not_found("user", id))
    }

    /// Apply a partial update.
    ///
    /// An empty patch fails with `DbError::Query` before anything is sent.
    pub async fn update(&self, id: i32, patch: UserPatch) -> Result<User, DbError> {
        let set = build_set_clause(patch.into_fields(), id)?;
        let fragment = Fragment::new(
            format!("UPDATE users {} RETURNING {USER_COLUMNS}", set.text),
            set.params,
        );
        self.fetch_one(&fragment, id).await
    }

    /// Flip one preference and return the updated user.
    ///
    /// Negation happens inside the UPDATE, so concurrent toggles cannot
    /// act on a stale read.
    pub async fn toggle_preference(&self, preference: Preference, id: i32) -> Result<User, DbError> {
        let column = preference.column();
        let fragment = Fragment::new(
            format!("UPDATE users SET {column} = NOT {column} WHERE id=$1 RETURNING {USER_COLUMNS}"),
            vec![id.into()],
        );
        let user = self.fetch_one(&fragment, id).await?;
        tracing::debug!(
            user_id = id,
            preference = column,
            value = preference.pick(user.preferences()),
            "preference toggled"
        );
        Ok(user)
    }

    async fn fetch_one(&self, fragment: &Fragment, id: i32) -> Result<User, DbError> {
        self.store
            .query(fragment)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DbError::not_found("user", id))
    }
}
