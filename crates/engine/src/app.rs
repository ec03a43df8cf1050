//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    neo4j::Neo4jRepositories,
    ports::{ClockPort, FollowRepo},
};
use crate::use_cases::FollowUseCases;

/// Main application state.
///
/// Holds all use cases. Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub follows: FollowUseCases,
}

impl App {
    /// Create a new App wired to Neo4j and the system clock.
    pub fn new(repos: Neo4jRepositories) -> Self {
        let follow_repo: Arc<dyn FollowRepo> = repos.follow;
        Self::from_ports(follow_repo, Arc::new(SystemClock::new()))
    }

    /// Create an App from port implementations directly.
    pub fn from_ports(follow_repo: Arc<dyn FollowRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            use_cases: UseCases {
                follows: FollowUseCases::new(follow_repo, clock),
            },
        }
    }
}
