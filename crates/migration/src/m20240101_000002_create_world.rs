//! Create `world` table.
//!
//! Column name `randomnumber` is kept lowercase to match the benchmark schema.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(World::Table)
                    .if_not_exists()
                    .col(integer(World::Id).primary_key())
                    .col(integer(World::Randomnumber).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(World::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum World { Table, Id, Randomnumber }
