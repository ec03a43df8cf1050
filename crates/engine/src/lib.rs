//! Followgraph Engine library.
//!
//! Follow relationships between users and friend-of-friend recommendations,
//! backed by Neo4j.
//!
//! ## Structure
//!
//! - `use_cases/` - Validation and orchestration of follow operations
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// E2E integration tests using real Neo4j via testcontainers.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
