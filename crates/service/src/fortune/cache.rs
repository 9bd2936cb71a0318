use std::{future::Future, sync::Arc, time::Duration};

use configs::CacheConfig;
use moka::future::Cache;
use tracing::debug;

use super::domain::Fortune;
use crate::errors::ServiceError;

const PERSISTED_KEY: &str = "fortunes:persisted";

/// Holds the persisted fortunes between requests.
///
/// Built once at startup from `[cache]` and handed to `FortuneService`.
/// Only successful loads are stored, and concurrent misses share one load.
#[derive(Clone)]
pub struct FortuneCache {
    inner: Cache<&'static str, Arc<Vec<Fortune>>>,
}

impl FortuneCache {
    pub fn new(cfg: &CacheConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(cfg.max_capacity)
            .time_to_live(Duration::from_secs(cfg.ttl_secs))
            .build();
        Self { inner }
    }

    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<Vec<Fortune>>, ServiceError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Fortune>, ServiceError>>,
    {
        self.inner
            .try_get_with(PERSISTED_KEY, async move {
                let rows = load().await?;
                debug!(rows = rows.len(), "fortune cache filled");
                Ok::<_, ServiceError>(Arc::new(rows))
            })
            .await
            .map_err(|e: Arc<ServiceError>| (*e).clone())
    }

    pub async fn invalidate(&self) {
        self.inner.invalidate(PERSISTED_KEY).await;
    }
}
