use async_trait::async_trait;

use super::domain::Fortune;
use crate::errors::ServiceError;

/// Data access for persisted fortunes.
#[async_trait]
pub trait FortuneRepository: Send + Sync {
    /// Every persisted fortune, in storage order.
    async fn all(&self) -> Result<Vec<Fortune>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryFortuneRepository {
        rows: Mutex<Vec<Fortune>>,
        calls: AtomicUsize,
        failing: AtomicBool,
    }

    impl InMemoryFortuneRepository {
        pub fn with_rows(rows: Vec<Fortune>) -> Self {
            Self { rows: Mutex::new(rows), ..Default::default() }
        }

        /// Number of times `all` has been called.
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Make subsequent `all` calls fail with a database error.
        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn push(&self, fortune: Fortune) {
            self.rows.lock().unwrap().push(fortune);
        }
    }

    #[async_trait]
    impl FortuneRepository for InMemoryFortuneRepository {
        async fn all(&self) -> Result<Vec<Fortune>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(self.rows.lock().unwrap().clone())
        }
    }
}
