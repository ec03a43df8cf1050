//! Neo4j database implementations.

use std::sync::Arc;

use followgraph_domain::TieBreak;

mod follow_repo;
mod graph;
mod helpers;
mod schema;


pub use follow_repo::Neo4jFollowRepo;
pub use graph::Neo4jGraph;
pub use schema::ensure_schema;

/// Create all Neo4j repositories from a graph connection.
pub struct Neo4jRepositories {
    pub follow: Arc<Neo4jFollowRepo>,
}

impl Neo4jRepositories {
    pub fn new(graph: Neo4jGraph, tie_break: TieBreak) -> Self {
        Self {
            follow: Arc::new(Neo4jFollowRepo::new(graph, tie_break)),
        }
    }
}
