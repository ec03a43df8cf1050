//! Value objects for query shaping.

mod paging;
mod tie_break;

pub use paging::{PageRequest, DEFAULT_FOLLOWEES_LIMIT, DEFAULT_RECOMMENDATION_LIMIT};
pub use tie_break::TieBreak;
