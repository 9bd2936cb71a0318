//! Create `fortune` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fortune::Table)
                    .if_not_exists()
                    .col(integer(Fortune::Id).primary_key())
                    .col(string_len(Fortune::Message, 2048).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Fortune::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Fortune { Table, Id, Message }
