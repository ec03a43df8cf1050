//! Common validation helpers for use cases.

use followgraph_domain::UserId;

/// Validation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },

    #[error("{field_name} is invalid: {reason}")]
    Invalid {
        field_name: &'static str,
        reason: String,
    },
}

/// Require a non-empty identifier, taken as-is.
pub fn require_user_id(value: &str, field_name: &'static str) -> Result<UserId, ValidationError> {
    UserId::new(value).map_err(|_| ValidationError::Empty { field_name })
}

/// Require an identifier that is non-empty after trimming; returns the trimmed id.
pub fn require_trimmed_user_id(
    value: &str,
    field_name: &'static str,
) -> Result<UserId, ValidationError> {
    require_user_id(value.trim(), field_name)
}

/// Require two identifiers to name different users.
pub fn require_distinct(
    first: &UserId,
    second: &UserId,
    field_name: &'static str,
) -> Result<(), ValidationError> {
    if first == second {
        return Err(ValidationError::Invalid {
            field_name,
            reason: "must differ from the other user id".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_user_id_keeps_whitespace() {
        let id = require_user_id("  ", "user_id").expect("whitespace is not empty");
        assert_eq!(id.as_str(), "  ");
        assert_eq!(
            require_user_id("", "user_id"),
            Err(ValidationError::Empty { field_name: "user_id" })
        );
    }

    #[test]
    fn require_trimmed_user_id_trims() {
        let id = require_trimmed_user_id("  bob\t", "follower_id").expect("non-empty");
        assert_eq!(id.as_str(), "bob");
        assert_eq!(
            require_trimmed_user_id(" \n ", "follower_id"),
            Err(ValidationError::Empty { field_name: "follower_id" })
        );
    }

    #[test]
    fn require_distinct_rejects_same_user() {
        let a = require_user_id("a", "follower_id").expect("valid");
        let b = require_user_id("b", "followee_id").expect("valid");
        assert!(require_distinct(&a, &b, "followee_id").is_ok());
        assert!(matches!(
            require_distinct(&a, &a, "followee_id"),
            Err(ValidationError::Invalid { field_name: "followee_id", .. })
        ));
    }
}
