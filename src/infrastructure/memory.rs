//! In-memory repositories for development and testing
//!
//! Same contracts as the SeaORM repositories, including the one
//! ready-to-play reservation per slot guarantee: the ready marker is
//! claimed through the map's entry lock, so a concurrent second booking
//! for the same slot fails with `Conflict` instead of double-booking.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::court::{CourtRepository, TennisCourt};
use crate::domain::guest::{Guest, GuestRepository};
use crate::domain::reservation::{Reservation, ReservationRepository, ReservationStatus};
use crate::domain::schedule::{Schedule, ScheduleRepository};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

#[derive(Default)]
pub struct InMemoryGuestRepository {
    guests: DashMap<i64, Guest>,
    next_id: AtomicI64,
}

#[async_trait]
impl GuestRepository for InMemoryGuestRepository {
    async fn save(&self, mut guest: Guest) -> DomainResult<Guest> {
        guest.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.guests.insert(guest.id, guest.clone());
        Ok(guest)
    }

    async fn update(&self, guest: Guest) -> DomainResult<Guest> {
        if !self.guests.contains_key(&guest.id) {
            return Err(DomainError::not_found("Guest", "id", guest.id));
        }
        self.guests.insert(guest.id, guest.clone());
        Ok(guest)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Guest>> {
        Ok(self.guests.get(&id).map(|g| g.clone()))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Vec<Guest>> {
        let mut matches: Vec<Guest> = self
            .guests
            .iter()
            .filter(|g| g.name == name)
            .map(|g| g.clone())
            .collect();
        matches.sort_by_key(|g| g.id);
        Ok(matches)
    }

    async fn find_all(&self) -> DomainResult<Vec<Guest>> {
        let mut all: Vec<Guest> = self.guests.iter().map(|g| g.clone()).collect();
        all.sort_by_key(|g| g.id);
        Ok(all)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        self.guests
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Guest", "id", id))
    }
}

#[derive(Default)]
pub struct InMemoryCourtRepository {
    courts: DashMap<i64, TennisCourt>,
    next_id: AtomicI64,
}

#[async_trait]
impl CourtRepository for InMemoryCourtRepository {
    async fn save(&self, mut court: TennisCourt) -> DomainResult<TennisCourt> {
        court.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.courts.insert(court.id, court.clone());
        Ok(court)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<TennisCourt>> {
        Ok(self.courts.get(&id).map(|c| c.clone()))
    }
}

#[derive(Default)]
pub struct InMemoryScheduleRepository {
    schedules: DashMap<i64, Schedule>,
    next_id: AtomicI64,
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn save(&self, mut schedule: Schedule) -> DomainResult<Schedule> {
        let taken = self.schedules.iter().any(|s| {
            s.tennis_court_id == schedule.tennis_court_id
                && s.start_date_time == schedule.start_date_time
        });
        if taken {
            return Err(DomainError::Conflict(format!(
                "the schedule slot is already taken: {}",
                schedule.start_date_time
            )));
        }
        schedule.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.schedules.insert(schedule.id, schedule.clone());
        Ok(schedule)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Schedule>> {
        Ok(self.schedules.get(&id).map(|s| s.clone()))
    }

    async fn find_by_court_and_start(
        &self,
        tennis_court_id: i64,
        start_date_time: DateTime<Utc>,
    ) -> DomainResult<Option<Schedule>> {
        Ok(self
            .schedules
            .iter()
            .find(|s| s.tennis_court_id == tennis_court_id && s.start_date_time == start_date_time)
            .map(|s| s.clone()))
    }

    async fn find_by_court(&self, tennis_court_id: i64) -> DomainResult<Vec<Schedule>> {
        let mut slots: Vec<Schedule> = self
            .schedules
            .iter()
            .filter(|s| s.tennis_court_id == tennis_court_id)
            .map(|s| s.clone())
            .collect();
        slots.sort_by_key(|s| s.start_date_time);
        Ok(slots)
    }

    async fn find_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<Vec<Schedule>> {
        let mut slots: Vec<Schedule> = self
            .schedules
            .iter()
            .filter(|s| s.start_date_time >= start && s.end_date_time <= end)
            .map(|s| s.clone())
            .collect();
        slots.sort_by_key(|s| s.start_date_time);
        Ok(slots)
    }
}

pub struct InMemoryReservationRepository {
    reservations: DashMap<i64, Reservation>,
    /// Slot ids currently holding a READY_TO_PLAY reservation, mapped to
    /// the holding reservation. Claimed via the entry lock so
    /// check-then-insert is atomic per slot.
    ready_slots: DashMap<i64, i64>,
    /// Shared with the schedule repository; the history query needs slot
    /// start times.
    schedules: Arc<InMemoryScheduleRepository>,
    next_id: AtomicI64,
}

impl InMemoryReservationRepository {
    pub fn new(schedules: Arc<InMemoryScheduleRepository>) -> Self {
        Self {
            reservations: DashMap::new(),
            ready_slots: DashMap::new(),
            schedules,
            next_id: AtomicI64::new(0),
        }
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn save(&self, mut reservation: Reservation) -> DomainResult<Reservation> {
        match self.ready_slots.entry(reservation.schedule_id) {
            Entry::Occupied(_) => Err(DomainError::Conflict(format!(
                "a ready-to-play reservation for schedule {} already exists",
                reservation.schedule_id
            ))),
            Entry::Vacant(slot) => {
                reservation.id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
                slot.insert(reservation.id);
                self.reservations
                    .insert(reservation.id, reservation.clone());
                Ok(reservation)
            }
        }
    }

    async fn update(&self, reservation: Reservation) -> DomainResult<Reservation> {
        if !self.reservations.contains_key(&reservation.id) {
            return Err(DomainError::not_found("Reservation", "id", reservation.id));
        }
        if reservation.status != ReservationStatus::ReadyToPlay {
            self.ready_slots
                .remove_if(&reservation.schedule_id, |_, held_by| {
                    *held_by == reservation.id
                });
        }
        self.reservations
            .insert(reservation.id, reservation.clone());
        Ok(reservation)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Reservation>> {
        Ok(self.reservations.get(&id).map(|r| r.clone()))
    }

    async fn find_for_schedule(&self, schedule_id: i64) -> DomainResult<Vec<Reservation>> {
        let mut matches: Vec<Reservation> = self
            .reservations
            .iter()
            .filter(|r| r.schedule_id == schedule_id)
            .map(|r| r.clone())
            .collect();
        matches.sort_by_key(|r| r.id);
        Ok(matches)
    }

    async fn find_starting_at_or_before(
        &self,
        instant: DateTime<Utc>,
    ) -> DomainResult<Vec<Reservation>> {
        let mut matches = Vec::new();
        for r in self.reservations.iter() {
            let started = self
                .schedules
                .schedules
                .get(&r.schedule_id)
                .map(|s| s.start_date_time <= instant)
                .unwrap_or(false);
            if started {
                matches.push(r.clone());
            }
        }
        matches.sort_by_key(|r| r.id);
        Ok(matches)
    }
}

/// In-memory repository provider for development and testing.
pub struct InMemoryRepositoryProvider {
    guests: InMemoryGuestRepository,
    courts: InMemoryCourtRepository,
    schedules: Arc<InMemoryScheduleRepository>,
    reservations: InMemoryReservationRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        let schedules = Arc::new(InMemoryScheduleRepository::default());
        Self {
            guests: InMemoryGuestRepository::default(),
            courts: InMemoryCourtRepository::default(),
            reservations: InMemoryReservationRepository::new(schedules.clone()),
            schedules,
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn guests(&self) -> &dyn GuestRepository {
        &self.guests
    }

    fn courts(&self) -> &dyn CourtRepository {
        &self.courts
    }

    fn schedules(&self) -> &dyn ScheduleRepository {
        self.schedules.as_ref()
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal::Decimal;

    fn ready(schedule_id: i64) -> Reservation {
        Reservation::book(1, schedule_id, Decimal::new(1000, 2), None, Utc::now())
    }

    #[tokio::test]
    async fn second_ready_reservation_for_a_slot_is_rejected() {
        let repo =
            InMemoryReservationRepository::new(Arc::new(InMemoryScheduleRepository::default()));
        repo.save(ready(7)).await.unwrap();

        let err = repo.save(ready(7)).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn slot_frees_up_once_the_reservation_resolves() {
        let repo =
            InMemoryReservationRepository::new(Arc::new(InMemoryScheduleRepository::default()));
        let mut first = repo.save(ready(7)).await.unwrap();

        first.settle(ReservationStatus::Cancelled, Decimal::new(1000, 2));
        repo.update(first).await.unwrap();

        assert!(repo.save(ready(7)).await.is_ok());
    }

    #[tokio::test]
    async fn duplicate_court_start_slot_is_rejected() {
        let repo = InMemoryScheduleRepository::default();
        let start = Utc::now() + Duration::hours(5);
        repo.save(Schedule::for_court(1, start)).await.unwrap();

        let err = repo.save(Schedule::for_court(1, start)).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // same start on another court is fine
        assert!(repo.save(Schedule::for_court(2, start)).await.is_ok());
    }
}
