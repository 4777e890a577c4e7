//! Create reservations table
//!
//! The partial unique index on (schedule_id) WHERE status = 'READY_TO_PLAY'
//! is what makes the booking conflict check race-free: two concurrent
//! inserts for the same slot cannot both commit as ready.

use sea_orm_migration::prelude::*;

use super::m20240601_000001_create_guests::Guests;
use super::m20240601_000003_create_schedules::Schedules;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Reservations::GuestId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::ScheduleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string()
                            .not_null()
                            .default("READY_TO_PLAY"),
                    )
                    .col(
                        ColumnDef::new(Reservations::Value)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::RefundValue).decimal_len(10, 2))
                    .col(ColumnDef::new(Reservations::PreviousReservationId).big_integer())
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_guest")
                            .from(Reservations::Table, Reservations::GuestId)
                            .to(Guests::Table, Guests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_schedule")
                            .from(Reservations::Table, Reservations::ScheduleId)
                            .to(Schedules::Table, Schedules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_schedule")
                    .table(Reservations::Table)
                    .col(Reservations::ScheduleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_status")
                    .table(Reservations::Table)
                    .col(Reservations::Status)
                    .to_owned(),
            )
            .await?;

        // Partial unique index: at most one READY_TO_PLAY reservation per
        // slot. SeaQuery's index builder has no WHERE clause, so raw SQL
        // (same syntax on SQLite and PostgreSQL).
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_reservations_ready_slot \
                 ON reservations (schedule_id) WHERE status = 'READY_TO_PLAY'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservations {
    Table,
    Id,
    GuestId,
    ScheduleId,
    Status,
    Value,
    RefundValue,
    PreviousReservationId,
    CreatedAt,
}
