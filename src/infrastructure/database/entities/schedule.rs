//! Schedule slot entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub tennis_court_id: i64,

    pub start_date_time: DateTimeUtc,
    pub end_date_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tennis_court::Entity",
        from = "Column::TennisCourtId",
        to = "super::tennis_court::Column::Id"
    )]
    TennisCourt,

    #[sea_orm(has_many = "super::reservation::Entity")]
    Reservation,
}

impl Related<super::tennis_court::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TennisCourt.def()
    }
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
