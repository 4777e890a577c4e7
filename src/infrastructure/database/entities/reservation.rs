//! Reservation entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub guest_id: i64,
    pub schedule_id: i64,

    /// Reservation status: READY_TO_PLAY, CANCELLED, RESCHEDULED
    pub status: String,

    /// Deposit amount still retained
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub value: Decimal,

    /// Amount refunded on cancel/reschedule
    #[sea_orm(nullable, column_type = "Decimal(Some((10, 2)))")]
    pub refund_value: Option<Decimal>,

    /// Reservation this one replaced (set via reschedule)
    #[sea_orm(nullable)]
    pub previous_reservation_id: Option<i64>,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guest::Entity",
        from = "Column::GuestId",
        to = "super::guest::Column::Id"
    )]
    Guest,

    #[sea_orm(
        belongs_to = "super::schedule::Entity",
        from = "Column::ScheduleId",
        to = "super::schedule::Column::Id"
    )]
    Schedule,
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
