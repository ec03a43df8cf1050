//! Neo4j graph wrapper with scoped transactions.

use std::time::{Duration, Instant};

use neo4rs::{query, Graph, Query, Row, Txn};

use crate::infrastructure::ports::RepoError;

/// Transaction mode requested by a repository operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccessMode {
    Read,
    Write,
}

/// Concrete wrapper around `neo4rs::Graph`.
///
/// Every call opens one transaction, drains all rows, and then commits
/// (write) or rolls back (read). A failed query rolls back before the error
/// is returned, so no transaction outlives the call.
#[derive(Clone)]
pub struct Neo4jGraph {
    inner: Graph,
}

impl Neo4jGraph {
    pub fn new(graph: Graph) -> Self {
        Self { inner: graph }
    }

    /// Connect and verify the server answers, all within `timeout`.
    pub async fn connect(
        uri: &str,
        user: &str,
        password: &str,
        timeout: Duration,
    ) -> Result<Self, RepoError> {
        let attempt = async {
            let inner = Graph::new(uri, user, password)
                .await
                .map_err(|e| RepoError::database("connect", e))?;
            let graph = Self::new(inner);
            graph.verify_connectivity().await?;
            Ok(graph)
        };

        tokio::time::timeout(timeout, attempt)
            .await
            .map_err(|_| {
                RepoError::database(
                    "connect",
                    format!("no answer from {uri} within {}s", timeout.as_secs()),
                )
            })?
    }

    pub fn inner(&self) -> &Graph {
        &self.inner
    }

    /// Run `query` in a read transaction and return every row.
    pub async fn read(&self, query: Query, operation: &'static str) -> Result<Vec<Row>, RepoError> {
        self.transact(AccessMode::Read, query, operation).await
    }

    /// Run `query` in a write transaction, commit, and return every row.
    pub async fn write(
        &self,
        query: Query,
        operation: &'static str,
    ) -> Result<Vec<Row>, RepoError> {
        self.transact(AccessMode::Write, query, operation).await
    }

    /// Cheap round-trip used at startup and by the health probe.
    pub async fn verify_connectivity(&self) -> Result<(), RepoError> {
        let rows = self.read(query("RETURN 1 AS ok"), "health").await?;
        if rows.is_empty() {
            return Err(RepoError::database("health", "connectivity probe returned no row"));
        }
        Ok(())
    }

    async fn transact(
        &self,
        mode: AccessMode,
        query: Query,
        operation: &'static str,
    ) -> Result<Vec<Row>, RepoError> {
        let start = Instant::now();
        let mut txn = self
            .inner
            .start_txn()
            .await
            .map_err(|e| RepoError::database(operation, e))?;

        let rows = match fetch_all(&mut txn, query).await {
            Ok(rows) => rows,
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(
                        operation,
                        error = %rollback_err,
                        "Rollback after failed query also failed"
                    );
                }
                return Err(RepoError::database(operation, e));
            }
        };

        // Reads have nothing to persist.
        let finished = match mode {
            AccessMode::Write => txn.commit().await,
            AccessMode::Read => txn.rollback().await,
        };
        finished.map_err(|e| RepoError::database(operation, e))?;

        tracing::debug!(
            operation,
            mode = ?mode,
            rows = rows.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Graph transaction finished"
        );
        Ok(rows)
    }
}

async fn fetch_all(txn: &mut Txn, query: Query) -> Result<Vec<Row>, neo4rs::Error> {
    let mut stream = txn.execute(query).await?;
    let mut rows = Vec::new();
    while let Some(row) = stream.next(txn.handle()).await? {
        rows.push(row);
    }
    Ok(rows)
}
