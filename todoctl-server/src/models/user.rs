//! User request bodies

use serde::{Deserialize, Serialize};

use crate::db::query::SqlParam;

/// Partial user update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserPatch {
    pub name: Option<String>,
    pub sort: Option<bool>,
    pub filter: Option<bool>,
}

impl UserPatch {
    /// Present fields as `(column, value)` pairs in column order.
    pub fn into_fields(self) -> Vec<(&'static str, SqlParam)> {
        let mut fields = Vec::new();
        if let Some(name) = self.name {
            fields.push(("name", name.into()));
        }
        if let Some(sort) = self.sort {
            fields.push(("sort", sort.into()));
        }
        if let Some(filter) = self.filter {
            fields.push(("filter", filter.into()));
        }
        fields
    }
}
