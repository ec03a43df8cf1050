//! Use cases - user story orchestration over the repository ports.

pub mod follows;
pub mod validation;

pub use follows::{ErrorClass, FollowError, FollowUseCases};
