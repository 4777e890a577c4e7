//! Create schedules table
//!
//! One row per bookable slot. The same court cannot carry two slots with
//! the same start time (unique index).

use sea_orm_migration::prelude::*;

use super::m20240601_000002_create_tennis_courts::TennisCourts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schedules::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Schedules::TennisCourtId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Schedules::StartDateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Schedules::EndDateTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_tennis_court")
                            .from(Schedules::Table, Schedules::TennisCourtId)
                            .to(TennisCourts::Table, TennisCourts::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedules_court_start")
                    .table(Schedules::Table)
                    .col(Schedules::TennisCourtId)
                    .col(Schedules::StartDateTime)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedules_start")
                    .table(Schedules::Table)
                    .col(Schedules::StartDateTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedules::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Schedules {
    Table,
    Id,
    TennisCourtId,
    StartDateTime,
    EndDateTime,
}
