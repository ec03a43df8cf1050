//! Follow use case errors.

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;

/// Errors from follow use cases.
///
/// Validation variants are raised before any graph access. Repository
/// outcomes pass through unchanged inside `Repo`.
#[derive(Debug, thiserror::Error)]
pub enum FollowError {
    #[error("followerID and followeeID must be non-empty and different: {0}")]
    InvalidIdentifiers(ValidationError),

    #[error("missing follower_id or followee_id: {0}")]
    MissingIdentifiers(ValidationError),

    #[error("missing user_id")]
    MissingUserId,

    #[error("cannot unfollow self")]
    SelfRelationship,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Externally visible failure classes; transports map each to one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    InvalidArgument,
    NotFound,
    Internal,
}

impl FollowError {
    pub fn class(&self) -> ErrorClass {
        match self {
            FollowError::InvalidIdentifiers(_)
            | FollowError::MissingIdentifiers(_)
            | FollowError::MissingUserId
            | FollowError::SelfRelationship
            | FollowError::Repo(RepoError::SelfRelationship(_)) => ErrorClass::InvalidArgument,
            FollowError::Repo(RepoError::UserNotFound { .. })
            | FollowError::Repo(RepoError::NotFollowing { .. }) => ErrorClass::NotFound,
            FollowError::Repo(RepoError::Database { .. }) => ErrorClass::Internal,
        }
    }

    /// The graph store failed, as opposed to rejecting the request.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, FollowError::Repo(repo) if repo.is_store_failure())
    }
}

/// Log a failed use case by class only; identifiers stay out of the logs.
pub(super) fn log_failure(operation: &'static str, error: &FollowError) {
    if error.is_store_failure() {
        tracing::error!(operation, error = %error, "Graph store failure");
    } else {
        tracing::debug!(operation, class = ?error.class(), "Follow use case rejected");
    }
}
