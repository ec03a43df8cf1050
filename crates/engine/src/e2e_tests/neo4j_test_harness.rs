//! Neo4j test harness for E2E testing.
//!
//! Provides testcontainer-based Neo4j instance management for integration tests.

use std::time::Duration;

use neo4rs::{query, Graph};
use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};
use tokio::time::sleep;

use crate::infrastructure::neo4j::{ensure_schema, Neo4jGraph};

/// Password used for Neo4j test containers.
pub const TEST_NEO4J_PASSWORD: &str = "testpassword";

type HarnessResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Neo4j test harness managing container lifecycle.
pub struct Neo4jTestHarness {
    _container: ContainerAsync<GenericImage>,
    graph: Graph,
}

impl Neo4jTestHarness {
    /// Start a new Neo4j container, connect, and apply the schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the container fails to start or connection cannot be established.
    pub async fn start() -> HarnessResult<Self> {
        let container: ContainerAsync<GenericImage> =
            neo4j_image(TEST_NEO4J_PASSWORD).start().await;
        let bolt_port = container.get_host_port_ipv4(7687).await;
        let uri = format!("bolt://127.0.0.1:{bolt_port}");

        let graph = connect_with_retry(&uri, "neo4j", TEST_NEO4J_PASSWORD).await?;
        ensure_schema(&Neo4jGraph::new(graph.clone())).await?;

        Ok(Self {
            _container: container,
            graph,
        })
    }

    /// Raw driver handle, for seeding and inspecting data.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Wrapped handle for constructing repositories.
    pub fn neo4j_graph(&self) -> Neo4jGraph {
        Neo4jGraph::new(self.graph.clone())
    }

    /// Clean all data from the database.
    pub async fn clean(&self) -> HarnessResult<()> {
        clean_db(&self.graph).await
    }

    /// Create one `User` node per id.
    pub async fn seed_users(&self, ids: &[&str]) -> HarnessResult<()> {
        let ids: Vec<String> = ids.iter().map(|id| (*id).to_string()).collect();
        self.graph
            .run(query("UNWIND $ids AS id CREATE (:User {id: id})").param("ids", ids))
            .await
            .map_err(|e| format!("Failed to seed users: {e}"))?;
        Ok(())
    }

    /// Number of `FOLLOWS` edges from `follower` to `followee`.
    pub async fn edge_count(&self, follower: &str, followee: &str) -> HarnessResult<i64> {
        let mut result = self
            .graph
            .execute(
                query(
                    "MATCH (:User {id: $a})-[r:FOLLOWS]->(:User {id: $b})
                     RETURN count(r) AS n",
                )
                .param("a", follower)
                .param("b", followee),
            )
            .await?;
        let row = result.next().await?.ok_or("count returned no row")?;
        Ok(row.get::<i64>("n")?)
    }

    /// `since` of the edge as epoch seconds.
    pub async fn edge_since(&self, follower: &str, followee: &str) -> HarnessResult<i64> {
        let mut result = self
            .graph
            .execute(
                query(
                    "MATCH (:User {id: $a})-[r:FOLLOWS]->(:User {id: $b})
                     RETURN r.since.epochSeconds AS since",
                )
                .param("a", follower)
                .param("b", followee),
            )
            .await?;
        let row = result.next().await?.ok_or("edge not found")?;
        Ok(row.get::<i64>("since")?)
    }
}

/// Create a Neo4j container image with the given password.
///
/// Readiness is left to [`connect_with_retry`]; the wait condition only
/// covers initial container setup.
pub fn neo4j_image(password: &str) -> GenericImage {
    GenericImage::new("neo4j", "5.26.0-community")
        .with_env_var("NEO4J_AUTH", format!("neo4j/{password}"))
        .with_env_var(
            "NEO4J_dbms_connector_bolt_advertised__address",
            "localhost:7687",
        )
        // Memory limits to prevent JVM crashes under resource pressure
        .with_env_var("NEO4J_server_memory_heap_initial__size", "256m")
        .with_env_var("NEO4J_server_memory_heap_max__size", "512m")
        .with_env_var("NEO4J_server_memory_pagecache_size", "128m")
        .with_exposed_port(7687)
        .with_wait_for(WaitFor::seconds(5))
}

/// Connect to Neo4j with exponential backoff (500ms doubling, capped at 5s).
pub async fn connect_with_retry(uri: &str, user: &str, pass: &str) -> HarnessResult<Graph> {
    let max_attempts = 30;
    let max_delay = Duration::from_secs(5);

    let mut delay = Duration::from_millis(500);
    let mut last_err: Option<String> = None;

    for attempt in 1..=max_attempts {
        match Graph::new(uri, user, pass).await {
            Ok(graph) => match graph.run(query("RETURN 1")).await {
                Ok(()) => {
                    tracing::info!(attempt, uri, "Neo4j connection established and verified");
                    return Ok(graph);
                }
                Err(e) => last_err = Some(format!("Connection test query failed: {e}")),
            },
            Err(e) => last_err = Some(e.to_string()),
        }

        tracing::debug!(
            attempt,
            delay_ms = delay.as_millis(),
            error = last_err.as_deref().unwrap_or("unknown"),
            "Retrying Neo4j connection"
        );

        sleep(delay).await;
        delay = std::cmp::min(delay.saturating_mul(2), max_delay);
    }

    Err(format!(
        "Failed to connect to Neo4j at {uri} after {max_attempts} attempts: {last_err:?}"
    )
    .into())
}

/// Clean all data from a Neo4j database.
pub async fn clean_db(graph: &Graph) -> HarnessResult<()> {
    graph
        .run(query("MATCH (n) DETACH DELETE n"))
        .await
        .map_err(|e| format!("Failed to clean database: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires docker (testcontainers)"]
    async fn harness_seeds_and_cleans() {
        let harness = Neo4jTestHarness::start()
            .await
            .expect("Failed to start Neo4j harness");

        harness.seed_users(&["a", "b"]).await.expect("seed");
        assert_eq!(harness.edge_count("a", "b").await.expect("count"), 0);

        harness.clean().await.expect("clean");

        let mut result = harness
            .graph()
            .execute(query("MATCH (n) RETURN count(n) AS count"))
            .await
            .expect("Count query failed");
        let row = result.next().await.expect("No result").expect("Row error");
        let count: i64 = row.get("count").expect("Column not found");
        assert_eq!(count, 0);
    }
}
