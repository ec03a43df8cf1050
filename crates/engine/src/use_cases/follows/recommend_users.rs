//! Friend-of-friend recommendations.

use std::sync::Arc;

use followgraph_domain::{PageRequest, Recommendation};

use crate::infrastructure::ports::FollowRepo;
use crate::use_cases::validation::require_user_id;

use super::error::{log_failure, FollowError};

/// Rank users two follow-hops away by how many of the caller's followees
/// follow them.
pub struct RecommendUsers {
    repo: Arc<dyn FollowRepo>,
}

impl RecommendUsers {
    pub fn new(repo: Arc<dyn FollowRepo>) -> Self {
        Self { repo }
    }

    /// `limit <= 0` falls back to the default of 10.
    pub async fn execute(
        &self,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<Recommendation>, FollowError> {
        self.recommend(user_id, limit)
            .await
            .inspect_err(|e| log_failure("recommendations", e))
    }

    async fn recommend(&self, user_id: &str, limit: i64) -> Result<Vec<Recommendation>, FollowError> {
        let user = require_user_id(user_id, "user_id").map_err(|_| FollowError::MissingUserId)?;
        let limit = PageRequest::recommendation_limit(limit);
        Ok(self.repo.recommendations(&user, limit).await?)
    }
}
