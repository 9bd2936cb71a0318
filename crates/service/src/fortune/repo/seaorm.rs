use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::fortune::domain::Fortune;
use crate::fortune::repository::FortuneRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmFortuneRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl FortuneRepository for SeaOrmFortuneRepository {
    async fn all(&self) -> Result<Vec<Fortune>, ServiceError> {
        let rows = models::fortune::all(&self.db).await?;
        Ok(rows.into_iter().map(Fortune::from).collect())
    }
}
