use crate::db::connect;
use crate::{fortune, world};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Connect and migrate, or `None` when no database is reachable.
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

#[tokio::test]
async fn test_fortune_all_returns_seed_rows() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let rows = fortune::all(&db).await?;
    assert!(rows.len() >= migration::FORTUNES.len());
    for (id, message) in migration::FORTUNES {
        let row = rows.iter().find(|f| f.id == id).expect("seeded fortune present");
        assert_eq!(row.message, message);
    }
    Ok(())
}

#[tokio::test]
async fn test_world_find_within_seed_range() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let row = world::find(&db, 1).await?.expect("world 1 seeded");
    assert!((1..=migration::WORLD_ROWS).contains(&row.random_number));

    let last = world::find(&db, migration::WORLD_ROWS).await?;
    assert!(last.is_some());

    let missing = world::find(&db, migration::WORLD_ROWS + 1).await?;
    assert!(missing.is_none());
    Ok(())
}
