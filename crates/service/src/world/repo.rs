use sea_orm::DatabaseConnection;

use super::{World, WorldRepository};
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmWorldRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl WorldRepository for SeaOrmWorldRepository {
    async fn find(&self, id: i32) -> Result<Option<World>, ServiceError> {
        Ok(models::world::find(&self.db, id).await?.map(World::from))
    }
}
