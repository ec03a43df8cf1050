//! Error types for port operations.

use followgraph_domain::UserId;

/// Repository operation errors.
///
/// Domain outcomes the graph reports through row evidence are separate
/// variants; everything the driver raises collapses into `Database`.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Follow matched no row: one or both endpoint users do not exist.
    #[error("user not found: follower={follower_id} followee={followee_id}")]
    UserNotFound {
        follower_id: UserId,
        followee_id: UserId,
    },

    /// Unfollow deleted nothing: the edge (or an endpoint) does not exist.
    #[error("follow relationship does not exist: {follower_id} -> {followee_id}")]
    NotFollowing {
        follower_id: UserId,
        followee_id: UserId,
    },

    /// Follower and followee are the same user.
    #[error("self relationship: {0}")]
    SelfRelationship(UserId),

    /// Database operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    pub fn user_not_found(follower_id: &UserId, followee_id: &UserId) -> Self {
        Self::UserNotFound {
            follower_id: follower_id.clone(),
            followee_id: followee_id.clone(),
        }
    }

    pub fn not_following(follower_id: &UserId, followee_id: &UserId) -> Self {
        Self::NotFollowing {
            follower_id: follower_id.clone(),
            followee_id: followee_id.clone(),
        }
    }

    /// Check if this is a store-level failure rather than a domain outcome.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::Database { .. })
    }
}
