//! Repository port traits for graph access.

use async_trait::async_trait;
use followgraph_domain::{FollowEdge, Recommendation, UserId};

use super::error::RepoError;

// =============================================================================
// Follow Graph
// =============================================================================

/// Follow relationships and the queries derived from them.
///
/// Every method runs as exactly one transaction against the graph store.
/// Paging arguments are raw caller input; implementations apply the
/// [`followgraph_domain::PageRequest`] defaults themselves.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowRepo: Send + Sync {
    /// Create the edge if absent. `UserNotFound` when either endpoint is missing.
    async fn follow(&self, edge: &FollowEdge) -> Result<(), RepoError>;

    /// Delete the edge. `NotFollowing` when nothing was deleted.
    async fn unfollow(&self, follower_id: &UserId, followee_id: &UserId)
        -> Result<(), RepoError>;

    /// Users `user_id` follows, ordered by id ascending.
    async fn list_followees(
        &self,
        user_id: &UserId,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<UserId>, RepoError>;

    /// Users following `user_id`, ordered by id ascending.
    async fn list_followers(
        &self,
        user_id: &UserId,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<UserId>, RepoError>;

    /// Two-hop candidates ranked by mutual count descending.
    async fn recommendations(
        &self,
        user_id: &UserId,
        limit: i64,
    ) -> Result<Vec<Recommendation>, RepoError>;

    /// Round-trip to the store.
    async fn health(&self) -> Result<(), RepoError>;
}
