//! Graph store health probe.

use std::sync::Arc;

use crate::infrastructure::ports::FollowRepo;

use super::error::{log_failure, FollowError};

pub struct CheckHealth {
    repo: Arc<dyn FollowRepo>,
}

impl CheckHealth {
    pub fn new(repo: Arc<dyn FollowRepo>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<(), FollowError> {
        self.repo
            .health()
            .await
            .map_err(FollowError::from)
            .inspect_err(|e| log_failure("health", e))
    }
}
