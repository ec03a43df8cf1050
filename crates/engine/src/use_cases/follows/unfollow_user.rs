//! Unfollow user use case.
//!
//! Deletes an existing follow edge. Unlike follow, this is not idempotent:
//! removing an edge that is already gone reports `NotFollowing`.

use std::sync::Arc;

use crate::infrastructure::ports::FollowRepo;
use crate::use_cases::validation::require_user_id;

use super::error::{log_failure, FollowError};

pub struct UnfollowUser {
    repo: Arc<dyn FollowRepo>,
}

impl UnfollowUser {
    pub fn new(repo: Arc<dyn FollowRepo>) -> Self {
        Self { repo }
    }

    /// Remove the `follower_id -> followee_id` edge.
    ///
    /// Ids are taken verbatim; only the empty string is rejected.
    pub async fn execute(&self, follower_id: &str, followee_id: &str) -> Result<(), FollowError> {
        self.unfollow(follower_id, followee_id)
            .await
            .inspect_err(|e| log_failure("unfollow", e))
    }

    async fn unfollow(&self, follower_id: &str, followee_id: &str) -> Result<(), FollowError> {
        let follower =
            require_user_id(follower_id, "follower_id").map_err(FollowError::MissingIdentifiers)?;
        let followee =
            require_user_id(followee_id, "followee_id").map_err(FollowError::MissingIdentifiers)?;
        if follower == followee {
            return Err(FollowError::SelfRelationship);
        }

        self.repo.unfollow(&follower, &followee).await?;
        Ok(())
    }
}
