//! Follow relationship use cases.
//!
//! Every external caller goes through these: they validate identifiers and
//! then hand off to the [`FollowRepo`] port. None of them retries.

use std::sync::Arc;

use crate::infrastructure::ports::{ClockPort, FollowRepo};

mod check_health;
mod error;
mod follow_user;
mod list_follows;
mod recommend_users;
mod unfollow_user;

pub use check_health::CheckHealth;
pub use error::{ErrorClass, FollowError};
pub use follow_user::FollowUser;
pub use list_follows::{ListFollowees, ListFollowers};
pub use recommend_users::RecommendUsers;
pub use unfollow_user::UnfollowUser;

/// Container for follow use cases.
pub struct FollowUseCases {
    pub follow: FollowUser,
    pub unfollow: UnfollowUser,
    pub followees: ListFollowees,
    pub followers: ListFollowers,
    pub recommendations: RecommendUsers,
    pub health: CheckHealth,
}

impl FollowUseCases {
    pub fn new(repo: Arc<dyn FollowRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            follow: FollowUser::new(repo.clone(), clock),
            unfollow: UnfollowUser::new(repo.clone()),
            followees: ListFollowees::new(repo.clone()),
            followers: ListFollowers::new(repo.clone()),
            recommendations: RecommendUsers::new(repo.clone()),
            health: CheckHealth::new(repo),
        }
    }
}
