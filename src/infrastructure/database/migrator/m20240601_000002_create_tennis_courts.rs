//! Create tennis_courts table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TennisCourts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TennisCourts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TennisCourts::Name).string().not_null())
                    .col(
                        ColumnDef::new(TennisCourts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TennisCourts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TennisCourts {
    Table,
    Id,
    Name,
    CreatedAt,
}
