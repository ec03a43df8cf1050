//! Neo4j follow repository implementation.
//!
//! Follows are stored as edges: `(User)-[:FOLLOWS {since}]->(User)`.
//! `User` nodes are owned by another service and keyed on `id`.

use async_trait::async_trait;
use neo4rs::query;

use followgraph_domain::{FollowEdge, PageRequest, Recommendation, TieBreak, UserId};

use super::helpers::RowExt;
use super::Neo4jGraph;
use crate::infrastructure::ports::{FollowRepo, RepoError};

// Both MATCHes must hit for MERGE to run; otherwise the query yields no row.
const FOLLOW: &str = "MATCH (f:User {id: $follower_id})
MATCH (u:User {id: $followee_id})
MERGE (f)-[r:FOLLOWS]->(u)
ON CREATE SET r.since = datetime($since)
RETURN 1 AS ok";

const UNFOLLOW: &str = "MATCH (:User {id: $follower_id})-[r:FOLLOWS]->(:User {id: $followee_id})
DELETE r
RETURN count(r) AS deleted";

const FOLLOWEES: &str = "MATCH (:User {id: $user_id})-[:FOLLOWS]->(f:User)
RETURN f.id AS id
ORDER BY id
SKIP $skip LIMIT $limit";

const FOLLOWERS: &str = "MATCH (f:User)-[:FOLLOWS]->(:User {id: $user_id})
RETURN f.id AS id
ORDER BY id
SKIP $skip LIMIT $limit";

const RECOMMENDATIONS: &str = "MATCH (me:User {id: $user_id})-[:FOLLOWS]->(:User)-[:FOLLOWS]->(cand:User)
WHERE cand.id <> $user_id
  AND NOT (me)-[:FOLLOWS]->(cand)
WITH cand, count(*) AS mutual
RETURN cand.id AS user_id, mutual";

/// Cypher for the two-hop recommendation query under `tie_break`.
pub(crate) fn recommendations_cypher(tie_break: TieBreak) -> String {
    let order_by = match tie_break {
        TieBreak::StoreDefault => "ORDER BY mutual DESC",
        TieBreak::UserIdAscending => "ORDER BY mutual DESC, user_id ASC",
    };
    format!("{RECOMMENDATIONS}\n{order_by}\nLIMIT $limit")
}

pub struct Neo4jFollowRepo {
    graph: Neo4jGraph,
    tie_break: TieBreak,
}

impl Neo4jFollowRepo {
    pub fn new(graph: Neo4jGraph, tie_break: TieBreak) -> Self {
        Self { graph, tie_break }
    }

    async fn list_user_ids(
        &self,
        cypher: &'static str,
        operation: &'static str,
        user_id: &UserId,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<UserId>, RepoError> {
        let page = PageRequest::followees(skip, limit);
        let q = query(cypher)
            .param("user_id", user_id.as_str())
            .param("skip", page.skip())
            .param("limit", page.limit());

        self.graph
            .read(q, operation)
            .await?
            .iter()
            .map(|row| row.get_user_id("id"))
            .collect()
    }
}

#[async_trait]
impl FollowRepo for Neo4jFollowRepo {
    async fn follow(&self, edge: &FollowEdge) -> Result<(), RepoError> {
        let q = query(FOLLOW)
            .param("follower_id", edge.follower_id().as_str())
            .param("followee_id", edge.followee_id().as_str())
            .param("since", edge.since_rfc3339());

        let rows = self.graph.write(q, "follow").await?;
        if rows.is_empty() {
            return Err(RepoError::user_not_found(
                edge.follower_id(),
                edge.followee_id(),
            ));
        }
        Ok(())
    }

    async fn unfollow(
        &self,
        follower_id: &UserId,
        followee_id: &UserId,
    ) -> Result<(), RepoError> {
        if follower_id == followee_id {
            return Err(RepoError::SelfRelationship(follower_id.clone()));
        }

        let q = query(UNFOLLOW)
            .param("follower_id", follower_id.as_str())
            .param("followee_id", followee_id.as_str());

        let rows = self.graph.write(q, "unfollow").await?;
        let deleted = match rows.first() {
            Some(row) => row.get_i64_strict("deleted")?,
            None => 0,
        };
        if deleted == 0 {
            return Err(RepoError::not_following(follower_id, followee_id));
        }
        Ok(())
    }

    async fn list_followees(
        &self,
        user_id: &UserId,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<UserId>, RepoError> {
        self.list_user_ids(FOLLOWEES, "list_followees", user_id, skip, limit)
            .await
    }

    async fn list_followers(
        &self,
        user_id: &UserId,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<UserId>, RepoError> {
        self.list_user_ids(FOLLOWERS, "list_followers", user_id, skip, limit)
            .await
    }

    async fn recommendations(
        &self,
        user_id: &UserId,
        limit: i64,
    ) -> Result<Vec<Recommendation>, RepoError> {
        let q = query(&recommendations_cypher(self.tie_break))
            .param("user_id", user_id.as_str())
            .param("limit", PageRequest::recommendation_limit(limit));

        self.graph
            .read(q, "recommendations")
            .await?
            .iter()
            .map(|row| -> Result<Recommendation, RepoError> {
                Ok(Recommendation::new(
                    row.get_user_id("user_id")?,
                    row.get_i64_strict("mutual")?,
                ))
            })
            .collect()
    }

    async fn health(&self) -> Result<(), RepoError> {
        self.graph.verify_connectivity().await
    }
}
