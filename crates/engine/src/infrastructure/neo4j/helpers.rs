//! Neo4j row deserialization helpers.
//!
//! A required column that is missing, null, or of the wrong type means the
//! query and the code disagree; that surfaces as a store failure, never as a
//! silently defaulted value.

use followgraph_domain::UserId;
use neo4rs::Row;

use crate::infrastructure::ports::RepoError;

/// Extension trait for Neo4j rows with fail-fast accessors.
pub trait RowExt {
    /// Get a required string column.
    fn get_string_strict(&self, column: &str) -> Result<String, RepoError>;

    /// Get a required integer column.
    fn get_i64_strict(&self, column: &str) -> Result<i64, RepoError>;

    /// Get a required column holding a user id.
    fn get_user_id(&self, column: &str) -> Result<UserId, RepoError>;
}

impl RowExt for Row {
    fn get_string_strict(&self, column: &str) -> Result<String, RepoError> {
        self.get(column).map_err(|e| {
            RepoError::database(
                "parse",
                format!("Missing required column '{}': {}", column, e),
            )
        })
    }

    fn get_i64_strict(&self, column: &str) -> Result<i64, RepoError> {
        self.get(column).map_err(|e| {
            RepoError::database(
                "parse",
                format!("Missing required column '{}': {}", column, e),
            )
        })
    }

    fn get_user_id(&self, column: &str) -> Result<UserId, RepoError> {
        let raw = self.get_string_strict(column)?;
        UserId::new(raw).map_err(|e| {
            RepoError::database("parse", format!("Invalid user id in column '{}': {}", column, e))
        })
    }
}
