//! Followgraph domain types.
//!
//! Plain data carriers and their invariants. No I/O lives here; the engine
//! crate owns graph access.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{FollowEdge, Recommendation};
pub use error::DomainError;
pub use ids::UserId;
pub use value_objects::{
    PageRequest, TieBreak, DEFAULT_FOLLOWEES_LIMIT, DEFAULT_RECOMMENDATION_LIMIT,
};
