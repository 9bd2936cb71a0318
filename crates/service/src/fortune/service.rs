use std::sync::Arc;

use configs::RetrievalMode;
use tracing::{debug, instrument};

use super::cache::FortuneCache;
use super::domain::{with_additional_fortune, Fortune};
use super::repository::FortuneRepository;
use crate::errors::ServiceError;

/// Fortune listing service independent of web framework
#[derive(Clone)]
pub struct FortuneService {
    repo: Arc<dyn FortuneRepository>,
    cache: FortuneCache,
    mode: RetrievalMode,
}

impl FortuneService {
    pub fn new(repo: Arc<dyn FortuneRepository>, cache: FortuneCache, mode: RetrievalMode) -> Self {
        Self { repo, cache, mode }
    }

    pub fn mode(&self) -> RetrievalMode {
        self.mode
    }

    /// Load persisted fortunes, add the request-time fortune and sort by message.
    ///
    /// # Examples
    /// ```
    /// use service::fortune::{cache::FortuneCache, domain::Fortune, repository::mock::InMemoryFortuneRepository, FortuneService};
    /// use configs::{CacheConfig, RetrievalMode};
    /// use std::sync::Arc;
    /// let repo = Arc::new(InMemoryFortuneRepository::with_rows(vec![Fortune::new(1, "fortune: No such file or directory")]));
    /// let svc = FortuneService::new(repo, FortuneCache::new(&CacheConfig::default()), RetrievalMode::Direct);
    /// let fortunes = tokio_test::block_on(svc.list_for_request()).unwrap();
    /// assert_eq!(fortunes.len(), 2);
    /// assert_eq!(fortunes[0].id, 0);
    /// ```
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub async fn list_for_request(&self) -> Result<Vec<Fortune>, ServiceError> {
        let persisted = match self.mode {
            RetrievalMode::Direct => self.repo.all().await?,
            RetrievalMode::Cached => {
                let rows = self.cache.get_or_load(|| self.repo.all()).await?;
                rows.as_ref().clone()
            }
        };
        debug!(persisted = persisted.len(), "fortunes loaded");
        Ok(with_additional_fortune(persisted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fortune::repository::mock::InMemoryFortuneRepository;
    use configs::CacheConfig;

    fn service(repo: Arc<InMemoryFortuneRepository>, mode: RetrievalMode) -> FortuneService {
        FortuneService::new(repo, FortuneCache::new(&CacheConfig::default()), mode)
    }

    fn seeded() -> Arc<InMemoryFortuneRepository> {
        Arc::new(InMemoryFortuneRepository::with_rows(vec![
            Fortune::new(3, "After enough decimal places, nobody gives a damn."),
            Fortune::new(10, "Computers make very fast, very accurate mistakes."),
        ]))
    }

    #[tokio::test]
    async fn direct_mode_queries_repository_every_request() {
        let repo = seeded();
        let svc = service(Arc::clone(&repo), RetrievalMode::Direct);

        let first = svc.list_for_request().await.unwrap();
        repo.push(Fortune::new(20, "Zebra"));
        let second = svc.list_for_request().await.unwrap();

        assert_eq!(repo.calls(), 2);
        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 4);
        assert_eq!(second.last().unwrap().id, 20);
    }

    #[tokio::test]
    async fn cached_mode_reuses_persisted_rows() {
        let repo = seeded();
        let svc = service(Arc::clone(&repo), RetrievalMode::Cached);

        let first = svc.list_for_request().await.unwrap();
        repo.push(Fortune::new(20, "Zebra"));
        let second = svc.list_for_request().await.unwrap();

        assert_eq!(repo.calls(), 1);
        assert_eq!(first, second);
        // the request-time fortune is added on top of cached rows, exactly once
        assert_eq!(second.iter().filter(|f| f.id == 0).count(), 1);
    }

    #[tokio::test]
    async fn repository_error_propagates() {
        let repo = seeded();
        repo.set_failing(true);
        let svc = service(Arc::clone(&repo), RetrievalMode::Direct);

        let err = svc.list_for_request().await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
    }

    #[tokio::test]
    async fn cached_mode_retries_after_error() {
        let repo = seeded();
        repo.set_failing(true);
        let svc = service(Arc::clone(&repo), RetrievalMode::Cached);

        assert!(svc.list_for_request().await.is_err());
        repo.set_failing(false);
        let fortunes = svc.list_for_request().await.unwrap();

        assert_eq!(repo.calls(), 2);
        assert_eq!(fortunes.len(), 3);
    }

    /// Repository whose `all` takes a while, so concurrent callers overlap.
    #[derive(Default)]
    struct SlowFortuneRepository {
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait::async_trait]
    impl FortuneRepository for SlowFortuneRepository {
        async fn all(&self) -> Result<Vec<Fortune>, ServiceError> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            Ok(vec![Fortune::new(1, "fortune: No such file or directory")])
        }
    }

    #[tokio::test]
    async fn concurrent_cached_requests_share_one_load() {
        let repo = Arc::new(SlowFortuneRepository::default());
        let svc = FortuneService::new(
            repo.clone(),
            FortuneCache::new(&CacheConfig::default()),
            RetrievalMode::Cached,
        );

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let svc = svc.clone();
                tokio::spawn(async move { svc.list_for_request().await })
            })
            .collect();
        for handle in handles {
            let fortunes = handle.await.unwrap().unwrap();
            assert_eq!(fortunes.len(), 2);
        }

        assert_eq!(repo.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_store_yields_single_fortune() {
        let repo = Arc::new(InMemoryFortuneRepository::default());
        let svc = service(repo, RetrievalMode::Direct);

        let fortunes = svc.list_for_request().await.unwrap();
        assert_eq!(fortunes, vec![Fortune::additional()]);
    }
}
