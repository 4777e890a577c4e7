//! SeaORM implementation of GuestRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::db_err;
use crate::domain::guest::{Guest, GuestRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::guest;

pub struct SeaOrmGuestRepository {
    db: DatabaseConnection,
}

impl SeaOrmGuestRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: guest::Model) -> Guest {
    Guest {
        id: m.id,
        name: m.name,
        created_at: m.created_at,
    }
}

#[async_trait]
impl GuestRepository for SeaOrmGuestRepository {
    async fn save(&self, g: Guest) -> DomainResult<Guest> {
        debug!("Saving guest: {}", g.name);

        let model = guest::ActiveModel {
            name: Set(g.name),
            created_at: Set(g.created_at),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn update(&self, g: Guest) -> DomainResult<Guest> {
        let existing = guest::Entity::find_by_id(g.id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        if existing.is_none() {
            return Err(DomainError::not_found("Guest", "id", g.id));
        }

        let model = guest::ActiveModel {
            id: Set(g.id),
            name: Set(g.name),
            created_at: Set(g.created_at),
        };
        let updated = model.update(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(updated))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Guest>> {
        let model = guest::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Guest>> {
        let models = guest::Entity::find()
            .filter(guest::Column::Name.eq(name))
            .order_by_asc(guest::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Guest>> {
        let models = guest::Entity::find()
            .order_by_asc(guest::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = guest::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Guest", "id", id));
        }
        Ok(())
    }
}
