//! SeaORM implementation of CourtRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::db_err;
use crate::domain::court::{CourtRepository, TennisCourt};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::tennis_court;

pub struct SeaOrmCourtRepository {
    db: DatabaseConnection,
}

impl SeaOrmCourtRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: tennis_court::Model) -> TennisCourt {
    TennisCourt {
        id: m.id,
        name: m.name,
        created_at: m.created_at,
    }
}

#[async_trait]
impl CourtRepository for SeaOrmCourtRepository {
    async fn save(&self, court: TennisCourt) -> DomainResult<TennisCourt> {
        debug!("Saving tennis court: {}", court.name);

        let model = tennis_court::ActiveModel {
            name: Set(court.name),
            created_at: Set(court.created_at),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TennisCourt>> {
        let model = tennis_court::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }
}
