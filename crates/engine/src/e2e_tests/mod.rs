//! Backend E2E integration tests.
//!
//! These tests drive the complete App (use cases + Neo4j repository) against
//! a real Neo4j database started via testcontainers.
//!
//! # Running E2E Tests
//!
//! ```bash
//! # Run all E2E tests (requires Docker)
//! cargo test -p followgraph-engine --lib e2e_tests -- --ignored --test-threads=1
//! ```

mod neo4j_test_harness;

pub use neo4j_test_harness::*;
