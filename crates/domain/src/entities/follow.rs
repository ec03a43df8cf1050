//! Follow edge entity.
//!
//! Stored as `(User)-[:FOLLOWS {since}]->(User)`. At most one edge exists per
//! ordered pair; `since` is written when the edge is first created and never
//! touched again.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::DomainError;
use crate::ids::UserId;

/// A directed follow relationship from `follower_id` to `followee_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowEdge {
    follower_id: UserId,
    followee_id: UserId,
    since: DateTime<Utc>,
}

impl FollowEdge {
    /// Create a follow edge stamped with `since`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` when both endpoints are the same user.
    pub fn new(
        follower_id: UserId,
        followee_id: UserId,
        since: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if follower_id == followee_id {
            return Err(DomainError::constraint("A user cannot follow themselves"));
        }
        Ok(Self {
            follower_id,
            followee_id,
            since,
        })
    }

    pub fn follower_id(&self) -> &UserId {
        &self.follower_id
    }

    pub fn followee_id(&self) -> &UserId {
        &self.followee_id
    }

    /// Creation timestamp in the fixed UTC format the graph parses with
    /// `datetime()`, e.g. `2024-01-15T10:30:00Z`.
    pub fn since_rfc3339(&self) -> String {
        self.since.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user(id: &str) -> UserId {
        UserId::new(id).expect("valid id")
    }

    #[test]
    fn rejects_self_edge() {
        let now = Utc::now();
        let result = FollowEdge::new(user("a"), user("a"), now);
        assert!(matches!(result, Err(DomainError::Constraint(_))));
    }

    #[test]
    fn since_is_formatted_to_whole_seconds_in_utc() {
        let since = Utc
            .with_ymd_and_hms(2024, 1, 15, 10, 30, 0)
            .single()
            .expect("valid timestamp")
            + chrono::Duration::milliseconds(750);
        let edge = FollowEdge::new(user("a"), user("b"), since).expect("distinct users");

        assert_eq!(edge.since_rfc3339(), "2024-01-15T10:30:00Z");
        assert_eq!(edge.follower_id().as_str(), "a");
        assert_eq!(edge.followee_id().as_str(), "b");
    }
}
