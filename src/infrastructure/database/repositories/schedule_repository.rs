//! SeaORM implementation of ScheduleRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use super::db_err;
use crate::domain::schedule::{Schedule, ScheduleRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::schedule;

pub struct SeaOrmScheduleRepository {
    db: DatabaseConnection,
}

impl SeaOrmScheduleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: schedule::Model) -> Schedule {
    Schedule {
        id: m.id,
        tennis_court_id: m.tennis_court_id,
        start_date_time: m.start_date_time,
        end_date_time: m.end_date_time,
    }
}

#[async_trait]
impl ScheduleRepository for SeaOrmScheduleRepository {
    async fn save(&self, s: Schedule) -> DomainResult<Schedule> {
        debug!(
            "Saving schedule: court {} at {}",
            s.tennis_court_id, s.start_date_time
        );

        let start = s.start_date_time;
        let model = schedule::ActiveModel {
            tennis_court_id: Set(s.tennis_court_id),
            start_date_time: Set(s.start_date_time),
            end_date_time: Set(s.end_date_time),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(|e| {
            // idx_schedules_court_start: one slot per court + start time
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                DomainError::Conflict(format!("the schedule slot is already taken: {}", start))
            } else {
                db_err(e)
            }
        })?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Schedule>> {
        let model = schedule::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_court_and_start(
        &self,
        tennis_court_id: i64,
        start_date_time: DateTime<Utc>,
    ) -> DomainResult<Option<Schedule>> {
        let model = schedule::Entity::find()
            .filter(schedule::Column::TennisCourtId.eq(tennis_court_id))
            .filter(schedule::Column::StartDateTime.eq(start_date_time))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_court(&self, tennis_court_id: i64) -> DomainResult<Vec<Schedule>> {
        let models = schedule::Entity::find()
            .filter(schedule::Column::TennisCourtId.eq(tennis_court_id))
            .order_by_asc(schedule::Column::StartDateTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Schedule>> {
        let models = schedule::Entity::find()
            .filter(schedule::Column::StartDateTime.gte(start))
            .filter(schedule::Column::EndDateTime.lte(end))
            .order_by_asc(schedule::Column::StartDateTime)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }
}
