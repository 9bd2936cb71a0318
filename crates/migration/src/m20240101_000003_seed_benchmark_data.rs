//! Seed the benchmark rows: twelve fortunes and 10 000 worlds.
use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_fortune::Fortune;

pub const WORLD_ROWS: i32 = 10_000;

pub const FORTUNES: [(i32, &str); 12] = [
    (1, "fortune: No such file or directory"),
    (2, "A computer scientist is someone who fixes things that aren't broken."),
    (3, "After enough decimal places, nobody gives a damn."),
    (4, "A bad random number generator: 1, 1, 1, 1, 1, 4.33e+67, 1, 1, 1"),
    (5, "A computer program does what you tell it to do, not what you want it to do."),
    (6, "Emacs is a nice operating system, but I prefer UNIX. — Tom Christaensen"),
    (7, "Any program that runs right is obsolete."),
    (8, "A list is only as strong as its weakest link. — Donald Knuth"),
    (9, "Feature: A bug with seniority."),
    (10, "Computers make very fast, very accurate mistakes."),
    (11, "<script>alert(\"This should not be displayed in a browser alert box.\");</script>"),
    (12, "フレームワークのベンチマーク"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Fortune::Table)
            .columns([Fortune::Id, Fortune::Message])
            .on_conflict(OnConflict::column(Fortune::Id).do_nothing().to_owned());
        for (id, message) in FORTUNES {
            insert
                .values([id.into(), message.into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        let conn = manager.get_connection();
        conn.execute(manager.get_database_backend().build(&insert)).await?;

        // random() keeps the seed in SQL so 10k rows are one round trip
        let sql = format!(
            "INSERT INTO world (id, randomnumber) \
             SELECT x.id, floor(random() * {WORLD_ROWS})::int + 1 \
             FROM generate_series(1, {WORLD_ROWS}) AS x(id) \
             ON CONFLICT (id) DO NOTHING"
        );
        conn.execute_unprepared(&sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        conn.execute_unprepared("DELETE FROM world").await?;
        conn.execute_unprepared("DELETE FROM fortune").await?;
        Ok(())
    }
}
