//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::court::CourtRepository;
use crate::domain::guest::GuestRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::ReservationRepository;
use crate::domain::schedule::ScheduleRepository;

use super::court_repository::SeaOrmCourtRepository;
use super::guest_repository::SeaOrmGuestRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::schedule_repository::SeaOrmScheduleRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let guest = repos.guests().find_by_id(1).await?;
/// let past = repos.reservations().find_starting_at_or_before(now).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    guests: SeaOrmGuestRepository,
    courts: SeaOrmCourtRepository,
    schedules: SeaOrmScheduleRepository,
    reservations: SeaOrmReservationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            guests: SeaOrmGuestRepository::new(db.clone()),
            courts: SeaOrmCourtRepository::new(db.clone()),
            schedules: SeaOrmScheduleRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn guests(&self) -> &dyn GuestRepository {
        &self.guests
    }

    fn courts(&self) -> &dyn CourtRepository {
        &self.courts
    }

    fn schedules(&self) -> &dyn ScheduleRepository {
        &self.schedules
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}
