//! Domain entities.

mod follow;
mod recommendation;

pub use follow::FollowEdge;
pub use recommendation::Recommendation;
