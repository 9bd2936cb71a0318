#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connection to a migrated database, or `None` when tests should skip.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let migrated = *MIGRATED
        .get_or_init(|| async {
            match models::db::connect().await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return None;
    }
    // Return a fresh connection for the current test's runtime
    models::db::connect().await.ok()
}

mod seaorm_repositories {
    use super::get_db;
    use crate::fortune::domain::{with_additional_fortune, Fortune};
    use crate::fortune::repo::seaorm::SeaOrmFortuneRepository;
    use crate::fortune::repository::FortuneRepository;
    use crate::world::{repo::SeaOrmWorldRepository, WorldRepository, WORLD_ROWS};

    #[tokio::test]
    async fn fortunes_from_database_sort_with_additional() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmFortuneRepository { db };

        let persisted = repo.all().await.expect("load fortunes");
        let listed = with_additional_fortune(persisted.clone());

        assert_eq!(listed.len(), persisted.len() + 1);
        assert!(listed.contains(&Fortune::additional()));
        assert!(listed.windows(2).all(|w| w[0].message <= w[1].message));
    }

    #[tokio::test]
    async fn world_rows_are_found_by_id() {
        let Some(db) = get_db().await else { return };
        let repo = SeaOrmWorldRepository { db };

        let w = repo.find(WORLD_ROWS).await.expect("query world").expect("row exists");
        assert_eq!(w.id, WORLD_ROWS);
        assert!(repo.find(0).await.expect("query world").is_none());
    }
}
