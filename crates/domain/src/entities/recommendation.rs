//! Friend-of-friend recommendation.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// A candidate reached in two follow-hops, with the number of distinct
/// intermediates that lead to it.
///
/// Derived per request from the current edge set; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub user_id: UserId,
    pub mutual: i64,
}

impl Recommendation {
    pub fn new(user_id: UserId, mutual: i64) -> Self {
        Self { user_id, mutual }
    }
}
