//! Follow user use case.
//!
//! Creates a follow edge between two existing users. Repeating the call for
//! the same pair succeeds and keeps the first timestamp.

use std::sync::Arc;

use followgraph_domain::FollowEdge;

use crate::infrastructure::ports::{ClockPort, FollowRepo};
use crate::use_cases::validation::{require_distinct, require_trimmed_user_id, ValidationError};

use super::error::{log_failure, FollowError};

pub struct FollowUser {
    repo: Arc<dyn FollowRepo>,
    clock: Arc<dyn ClockPort>,
}

impl FollowUser {
    pub fn new(repo: Arc<dyn FollowRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { repo, clock }
    }

    /// Execute the follow use case.
    ///
    /// # Arguments
    /// * `follower_id` - The user who follows (surrounding whitespace ignored)
    /// * `followee_id` - The user being followed (surrounding whitespace ignored)
    ///
    /// # Returns
    /// * `Ok(())` - Edge exists after the call
    /// * `Err(FollowError::InvalidIdentifiers)` - Empty or equal ids; no graph access
    /// * `Err(FollowError::Repo(RepoError::UserNotFound))` - Either user is missing
    pub async fn execute(&self, follower_id: &str, followee_id: &str) -> Result<(), FollowError> {
        self.follow(follower_id, followee_id)
            .await
            .inspect_err(|e| log_failure("follow", e))
    }

    async fn follow(&self, follower_id: &str, followee_id: &str) -> Result<(), FollowError> {
        let follower = require_trimmed_user_id(follower_id, "follower_id")
            .map_err(FollowError::InvalidIdentifiers)?;
        let followee = require_trimmed_user_id(followee_id, "followee_id")
            .map_err(FollowError::InvalidIdentifiers)?;
        require_distinct(&follower, &followee, "followee_id")
            .map_err(FollowError::InvalidIdentifiers)?;

        let edge = FollowEdge::new(follower, followee, self.clock.now()).map_err(|e| {
            FollowError::InvalidIdentifiers(ValidationError::Invalid {
                field_name: "followee_id",
                reason: e.to_string(),
            })
        })?;

        self.repo.follow(&edge).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockClockPort, MockFollowRepo, RepoError};
    use crate::use_cases::follows::ErrorClass;
    use chrono::{TimeZone, Utc};

    fn fixed_clock() -> Arc<dyn ClockPort> {
        let now = Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        Arc::new(FixedClock(now))
    }

    #[tokio::test]
    async fn when_follower_empty_returns_invalid_without_store_call() {
        // No expectations: any repository call panics.
        let repo = MockFollowRepo::new();
        let use_case = FollowUser::new(Arc::new(repo), fixed_clock());

        let result = use_case.execute("", "b").await;

        assert!(matches!(result, Err(FollowError::InvalidIdentifiers(_))));
    }

    #[tokio::test]
    async fn when_ids_blank_after_trim_returns_invalid() {
        let use_case = FollowUser::new(Arc::new(MockFollowRepo::new()), fixed_clock());

        let result = use_case.execute("a", "   ").await;

        assert!(matches!(result, Err(FollowError::InvalidIdentifiers(_))));
    }

    #[tokio::test]
    async fn when_self_follow_returns_invalid_without_store_call() {
        let use_case = FollowUser::new(Arc::new(MockFollowRepo::new()), fixed_clock());

        let result = use_case.execute("a", " a ").await;

        let error = result.expect_err("self follow must fail");
        assert!(matches!(error, FollowError::InvalidIdentifiers(_)));
        assert_eq!(error.class(), ErrorClass::InvalidArgument);
    }

    #[tokio::test]
    async fn when_valid_input_trims_and_stamps_edge() {
        let mut repo = MockFollowRepo::new();
        repo.expect_follow()
            .withf(|edge| {
                edge.follower_id().as_str() == "alice"
                    && edge.followee_id().as_str() == "bob"
                    && edge.since_rfc3339() == "2024-03-01T12:00:00Z"
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = FollowUser::new(Arc::new(repo), fixed_clock());
        let result = use_case.execute("  alice ", "bob\n").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn when_user_missing_propagates_not_found() {
        let mut repo = MockFollowRepo::new();
        repo.expect_follow().returning(|edge| {
            Err(RepoError::user_not_found(
                edge.follower_id(),
                edge.followee_id(),
            ))
        });

        let use_case = FollowUser::new(Arc::new(repo), fixed_clock());
        let error = use_case
            .execute("alice", "ghost")
            .await
            .expect_err("missing user must fail");

        assert!(matches!(
            error,
            FollowError::Repo(RepoError::UserNotFound { .. })
        ));
        assert_eq!(error.class(), ErrorClass::NotFound);
    }

    #[tokio::test]
    async fn when_store_fails_returns_internal() {
        let mut repo = MockFollowRepo::new();
        repo.expect_follow()
            .returning(|_| Err(RepoError::database("follow", "connection reset")));

        let use_case = FollowUser::new(Arc::new(repo), fixed_clock());
        let error = use_case
            .execute("alice", "bob")
            .await
            .expect_err("store failure must surface");

        assert_eq!(error.class(), ErrorClass::Internal);
    }

    #[tokio::test]
    async fn clock_is_read_once_and_only_after_validation() {
        let mut clock = MockClockPort::new();
        clock.expect_now().times(1).returning(|| {
            Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5)
                .single()
                .expect("valid timestamp")
        });
        let mut repo = MockFollowRepo::new();
        repo.expect_follow()
            .withf(|edge| edge.since_rfc3339() == "2025-01-02T03:04:05Z")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = FollowUser::new(Arc::new(repo), Arc::new(clock));

        assert!(use_case.execute("a", "a").await.is_err());
        assert!(use_case.execute("a", "b").await.is_ok());
    }
}
