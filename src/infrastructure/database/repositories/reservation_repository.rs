//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, SqlErr,
};

use super::db_err;
use crate::domain::reservation::{Reservation, ReservationRepository, ReservationStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{reservation, schedule};

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: reservation::Model) -> DomainResult<Reservation> {
    let status = ReservationStatus::parse(&m.status).ok_or_else(|| {
        DomainError::Database(format!("unknown reservation status '{}'", m.status))
    })?;
    Ok(Reservation {
        id: m.id,
        guest_id: m.guest_id,
        schedule_id: m.schedule_id,
        status,
        value: m.value,
        refund_value: m.refund_value,
        previous_reservation_id: m.previous_reservation_id,
        created_at: m.created_at,
    })
}

// ── ReservationRepository impl ──────────────────────────────────

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn save(&self, r: Reservation) -> DomainResult<Reservation> {
        debug!(
            "Saving reservation: guest {} schedule {}",
            r.guest_id, r.schedule_id
        );

        let model = reservation::ActiveModel {
            guest_id: Set(r.guest_id),
            schedule_id: Set(r.schedule_id),
            status: Set(r.status.as_str().to_string()),
            value: Set(r.value),
            refund_value: Set(r.refund_value),
            previous_reservation_id: Set(r.previous_reservation_id),
            created_at: Set(r.created_at),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(|e| {
            // idx_reservations_ready_slot: lost the race for the slot
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                DomainError::Conflict(format!(
                    "a ready-to-play reservation for schedule {} already exists",
                    r.schedule_id
                ))
            } else {
                db_err(e)
            }
        })?;
        model_to_domain(inserted)
    }

    async fn update(&self, r: Reservation) -> DomainResult<Reservation> {
        debug!("Updating reservation: {}", r.id);

        let existing = reservation::Entity::find_by_id(r.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::not_found("Reservation", "id", r.id));
        }

        let model = reservation::ActiveModel {
            id: Set(r.id),
            guest_id: Set(r.guest_id),
            schedule_id: Set(r.schedule_id),
            status: Set(r.status.as_str().to_string()),
            value: Set(r.value),
            refund_value: Set(r.refund_value),
            previous_reservation_id: Set(r.previous_reservation_id),
            created_at: Set(r.created_at),
        };
        let updated = model.update(&self.db).await.map_err(db_err)?;
        model_to_domain(updated)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_for_schedule(&self, schedule_id: i64) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::ScheduleId.eq(schedule_id))
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_starting_at_or_before(
        &self,
        instant: DateTime<Utc>,
    ) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .join(JoinType::InnerJoin, reservation::Relation::Schedule.def())
            .filter(schedule::Column::StartDateTime.lte(instant))
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }
}
