//! Followee and follower listings.
//!
//! Both return ids in ascending order. Paging input is passed through
//! untouched; the repository applies the skip/limit defaults.

use std::sync::Arc;

use followgraph_domain::UserId;

use crate::infrastructure::ports::FollowRepo;
use crate::use_cases::validation::require_user_id;

use super::error::{log_failure, FollowError};

/// Users a given user follows.
pub struct ListFollowees {
    repo: Arc<dyn FollowRepo>,
}

impl ListFollowees {
    pub fn new(repo: Arc<dyn FollowRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<UserId>, FollowError> {
        self.list(user_id, skip, limit)
            .await
            .inspect_err(|e| log_failure("list_followees", e))
    }

    async fn list(&self, user_id: &str, skip: i64, limit: i64) -> Result<Vec<UserId>, FollowError> {
        let user = require_user_id(user_id, "user_id").map_err(|_| FollowError::MissingUserId)?;
        Ok(self.repo.list_followees(&user, skip, limit).await?)
    }
}

/// Users following a given user.
pub struct ListFollowers {
    repo: Arc<dyn FollowRepo>,
}

impl ListFollowers {
    pub fn new(repo: Arc<dyn FollowRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: &str,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<UserId>, FollowError> {
        self.list(user_id, skip, limit)
            .await
            .inspect_err(|e| log_failure("list_followers", e))
    }

    async fn list(&self, user_id: &str, skip: i64, limit: i64) -> Result<Vec<UserId>, FollowError> {
        let user = require_user_id(user_id, "user_id").map_err(|_| FollowError::MissingUserId)?;
        Ok(self.repo.list_followers(&user, skip, limit).await?)
    }
}
