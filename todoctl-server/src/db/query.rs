//! Query fragment builders
//!
//! Turns partial updates and user preferences into positionally
//! parameterized SQL fragments. Column names always come from
//! `&'static str` tables in the models, never from request input.

use chrono::NaiveDate;

use crate::models::Preferences;

/// A single bind value for a `$n` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Int(i32),
    Text(String),
    Bool(bool),
    Date(NaiveDate),
}

impl From<i32> for SqlParam {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<bool> for SqlParam {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<NaiveDate> for SqlParam {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

/// SQL text paired with the parameters its placeholders refer to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub params: Vec<SqlParam>,
}

impl Fragment {
    pub fn new(text: impl Into<String>, params: Vec<SqlParam>) -> Self {
        Self {
            text: text.into(),
            params,
        }
    }

    /// Number of `$n` placeholders in the text.
    pub fn placeholder_count(&self) -> usize {
        self.text
            .split('$')
            .skip(1)
            .filter(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
            .count()
    }
}

/// Query building error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// `SET WHERE id=$1` is not valid SQL, so an empty update is refused
    #[error("update must set at least one field")]
    EmptySet,
}

/// Build `SET a = $1, b = $2 WHERE id=$3` from an ordered field list.
///
/// Placeholders are numbered in list order and `id` is always the last
/// parameter.
///
/// # Errors
///
/// Returns [`QueryError::EmptySet`] when `fields` is empty.
///
/// # Example
///
/// ```
/// use todoctl_server::db::query::{build_set_clause, SqlParam};
///
/// let set = build_set_clause(vec![("value", "x".into())], 7).unwrap();
/// assert_eq!(set.text, "SET value = $1 WHERE id=$2");
/// assert_eq!(set.params, vec![SqlParam::Text("x".into()), SqlParam::Int(7)]);
/// ```
pub fn build_set_clause(
    fields: Vec<(&'static str, SqlParam)>,
    id: i32,
) -> Result<Fragment, QueryError> {
    if fields.is_empty() {
        return Err(QueryError::EmptySet);
    }

    let columns = fields
        .iter()
        .enumerate()
        .map(|(index, (column, _))| format!("{} = ${}", column, index + 1))
        .collect::<Vec<_>>()
        .join(", ");

    let text = format!("SET {} WHERE id=${}", columns, fields.len() + 1);

    let mut params: Vec<SqlParam> = fields.into_iter().map(|(_, value)| value).collect();
    params.push(SqlParam::Int(id));

    Ok(Fragment { text, params })
}

/// Build the filter/ordering suffix for a task listing whose base query
/// already binds `$1` (the user id).
pub fn build_filter_order(prefs: Preferences) -> Fragment {
    build_filter_order_from(prefs, 1)
}

/// Build the filter/ordering suffix, numbering placeholders after `offset`
/// parameters already consumed by the base query.
///
/// With `filter` on, completed tasks are hidden (`status=false` only).
/// Exactly one ORDER BY is always appended; it binds no parameters.
pub fn build_filter_order_from(prefs: Preferences, offset: usize) -> Fragment {
    let mut text = String::new();
    let mut params = Vec::new();

    if prefs.filter {
        params.push(SqlParam::Bool(false));
        text.push_str(&format!(" AND status=${}", offset + params.len()));
    }

    if prefs.sort {
        text.push_str(" ORDER BY due_date");
    } else {
        text.push_str(" ORDER BY id DESC");
    }

    Fragment { text, params }
}
