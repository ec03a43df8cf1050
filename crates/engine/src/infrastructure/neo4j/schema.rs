//! Neo4j schema initialization - constraints and indexes.

use neo4rs::query;

use crate::infrastructure::neo4j::Neo4jGraph;

/// Initialize Neo4j schema with required constraints.
///
/// This should be called once on startup. Constraints are created with
/// IF NOT EXISTS to be idempotent.
pub async fn ensure_schema(graph: &Neo4jGraph) -> Result<(), neo4rs::Error> {
    // Unique `User.id` backs every MATCH in the follow repository with an index.
    graph
        .inner()
        .run(query(
            "CREATE CONSTRAINT user_id_unique IF NOT EXISTS
             FOR (u:User) REQUIRE u.id IS UNIQUE",
        ))
        .await?;

    tracing::info!("Neo4j schema initialized (constraints ensured)");
    Ok(())
}
