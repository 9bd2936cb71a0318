//! Single-row `World` lookups for the `/db` benchmark.

pub mod repo;

use std::sync::Arc;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::errors::ServiceError;

/// Number of seeded `world` rows; ids are `1..=WORLD_ROWS`.
pub const WORLD_ROWS: i32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    pub id: i32,
    #[serde(rename = "randomNumber")]
    pub random_number: i32,
}

impl From<models::world::Model> for World {
    fn from(m: models::world::Model) -> Self {
        Self { id: m.id, random_number: m.random_number }
    }
}

#[async_trait]
pub trait WorldRepository: Send + Sync {
    async fn find(&self, id: i32) -> Result<Option<World>, ServiceError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct InMemoryWorldRepository {
        rows: HashMap<i32, World>,
    }

    impl InMemoryWorldRepository {
        /// Fill ids `1..=count` with `random_number = id`.
        pub fn seeded(count: i32) -> Self {
            let rows = (1..=count).map(|id| (id, World { id, random_number: id })).collect();
            Self { rows }
        }
    }

    #[async_trait]
    impl WorldRepository for InMemoryWorldRepository {
        async fn find(&self, id: i32) -> Result<Option<World>, ServiceError> {
            Ok(self.rows.get(&id).cloned())
        }
    }
}

#[derive(Clone)]
pub struct WorldService {
    repo: Arc<dyn WorldRepository>,
}

impl WorldService {
    pub fn new(repo: Arc<dyn WorldRepository>) -> Self {
        Self { repo }
    }

    pub async fn find(&self, id: i32) -> Result<World, ServiceError> {
        self.repo
            .find(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("world"))
    }

    /// Fetch the row for a uniformly random id in `1..=WORLD_ROWS`.
    #[instrument(skip(self))]
    pub async fn random_world(&self) -> Result<World, ServiceError> {
        let id = rand::thread_rng().gen_range(1..=WORLD_ROWS);
        self.find(id).await
    }
}
