//! Repository error type

use super::query::QueryError;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid query: {0}")]
    Query(#[from] QueryError),
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = DbError::not_found("task", 999);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: task '999'");
    }

    #[test]
    fn store_failure_is_not_absence() {
        let err = DbError::from(sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());
    }
}
