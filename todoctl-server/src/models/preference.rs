//! Per-user display preferences

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One of the two boolean preference columns on `users`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    /// Order tasks by due date instead of newest first
    Sort,
    /// Hide completed tasks
    Filter,
}

impl Preference {
    /// Column backing this preference.
    pub fn column(self) -> &'static str {
        match self {
            Self::Sort => "sort",
            Self::Filter => "filter",
        }
    }

    /// Project this preference out of a preference pair.
    pub fn pick(self, prefs: Preferences) -> bool {
        match self {
            Self::Sort => prefs.sort,
            Self::Filter => prefs.filter,
        }
    }
}

/// Both preferences of a user, as read before listing their tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Preferences {
    pub sort: bool,
    pub filter: bool,
}
