//! Reservation lifecycle service
//!
//! Owns the booking state machine: validates bookings against slot
//! conflicts and start times, settles deposits on cancellation, and chains
//! reschedules to their replacement bookings.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::domain::reservation::{refund_amount, Reservation, ResolutionAction};
use crate::domain::schedule::Schedule;
use crate::domain::{Clock, DomainError, DomainResult, RepositoryProvider};

pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
    clock: Arc<dyn Clock>,
    /// Flat deposit charged per booking
    deposit: Decimal,
}

impl ReservationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, clock: Arc<dyn Clock>, deposit: Decimal) -> Self {
        Self {
            repos,
            clock,
            deposit,
        }
    }

    /// Book a slot for a guest.
    ///
    /// The guest and slot must exist, the slot must not already hold a
    /// ready-to-play reservation, and its start must be in the future.
    pub async fn book(&self, guest_id: i64, schedule_id: i64) -> DomainResult<Reservation> {
        self.book_slot(guest_id, schedule_id, None).await
    }

    pub async fn find_by_id(&self, reservation_id: i64) -> DomainResult<Reservation> {
        self.require_reservation(reservation_id).await
    }

    /// Cancel a ready reservation, refunding part of the deposit depending
    /// on how far ahead of the slot start the cancellation lands.
    pub async fn cancel(&self, reservation_id: i64) -> DomainResult<Reservation> {
        let reservation = self.require_reservation(reservation_id).await?;
        let cancelled = self.resolve(reservation, ResolutionAction::Cancel).await?;

        metrics::counter!("reservations_cancelled_total").increment(1);
        info!(
            "Reservation {} cancelled, refund {}",
            cancelled.id,
            cancelled.refund_value.unwrap_or(Decimal::ZERO)
        );
        Ok(cancelled)
    }

    /// Move a ready reservation to another slot.
    ///
    /// The old reservation is settled exactly like a cancellation but ends
    /// up `RESCHEDULED`, and that mutation is committed durably *before*
    /// the replacement booking is attempted. A failure of the replacement
    /// booking (e.g. the target slot was taken concurrently) therefore
    /// leaves the old reservation rescheduled-out and surfaces the booking
    /// error to the caller; there is no rollback.
    pub async fn reschedule(
        &self,
        reservation_id: i64,
        new_schedule_id: Option<i64>,
    ) -> DomainResult<Reservation> {
        let reservation = self.require_reservation(reservation_id).await?;
        let new_schedule_id = new_schedule_id.ok_or_else(|| {
            DomainError::InvalidRequest("schedule id cannot be null".to_string())
        })?;
        if reservation.schedule_id == new_schedule_id {
            return Err(DomainError::InvalidRequest(
                "cannot reschedule to the same slot".to_string(),
            ));
        }

        let previous = self
            .resolve(reservation, ResolutionAction::Reschedule)
            .await?;

        let replacement = self
            .book_slot(previous.guest_id, new_schedule_id, Some(previous.id))
            .await?;

        metrics::counter!("reservations_rescheduled_total").increment(1);
        info!(
            "Reservation {} rescheduled to {} (replacement {})",
            previous.id, new_schedule_id, replacement.id
        );
        Ok(replacement)
    }

    /// Reservations whose slot has already started, any status.
    pub async fn show_past_reservations(&self) -> DomainResult<Vec<Reservation>> {
        self.repos
            .reservations()
            .find_starting_at_or_before(self.clock.now())
            .await
    }

    // ── Internals ───────────────────────────────────────────────

    async fn book_slot(
        &self,
        guest_id: i64,
        schedule_id: i64,
        previous_reservation_id: Option<i64>,
    ) -> DomainResult<Reservation> {
        let guest = self
            .repos
            .guests()
            .find_by_id(guest_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Guest", "id", guest_id))?;
        let schedule = self.require_schedule(schedule_id).await?;

        self.validate_booking(&schedule).await?;

        let reservation = Reservation::book(
            guest.id,
            schedule.id,
            self.deposit,
            previous_reservation_id,
            self.clock.now(),
        );
        let saved = self.repos.reservations().save(reservation).await?;

        metrics::counter!("reservations_booked_total").increment(1);
        info!(
            "Reservation {} booked: guest {} schedule {}",
            saved.id, saved.guest_id, saved.schedule_id
        );
        Ok(saved)
    }

    /// The read-side conflict check carries the court and time window for
    /// the 409 message; the store's unique index is what actually closes
    /// the race.
    async fn validate_booking(&self, schedule: &Schedule) -> DomainResult<()> {
        let existing = self
            .repos
            .reservations()
            .find_for_schedule(schedule.id)
            .await?;
        if existing.iter().any(Reservation::is_ready_to_play) {
            let court = self
                .repos
                .courts()
                .find_by_id(schedule.tennis_court_id)
                .await?;
            let court_name = court
                .map(|c| c.name)
                .unwrap_or_else(|| format!("#{}", schedule.tennis_court_id));
            return Err(DomainError::Conflict(format!(
                "reservation for tennis court {}, start = {}, end = {}",
                court_name, schedule.start_date_time, schedule.end_date_time
            )));
        }

        if !schedule.starts_after(self.clock.now()) {
            return Err(DomainError::InvalidRequest(
                "start date and time is in the past".to_string(),
            ));
        }
        Ok(())
    }

    /// Shared cancel/reschedule transition: status gate, future-slot gate,
    /// refund computation, settle, persist.
    async fn resolve(
        &self,
        mut reservation: Reservation,
        action: ResolutionAction,
    ) -> DomainResult<Reservation> {
        let next_status = reservation.status.resolve(action)?;

        let schedule = self.require_schedule(reservation.schedule_id).await?;
        let now = self.clock.now();
        if !schedule.starts_after(now) {
            return Err(DomainError::InvalidRequest(
                "can cancel/reschedule only future slots".to_string(),
            ));
        }

        let refund = refund_amount(reservation.value, schedule.minutes_until_start(now));
        reservation.settle(next_status, refund);
        self.repos.reservations().update(reservation).await
    }

    async fn require_reservation(&self, id: i64) -> DomainResult<Reservation> {
        self.repos
            .reservations()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Reservation", "id", id))
    }

    async fn require_schedule(&self, id: i64) -> DomainResult<Schedule> {
        self.repos
            .schedules()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Schedule", "id", id))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use crate::domain::clock::FixedClock;
    use crate::domain::guest::Guest;
    use crate::domain::court::TennisCourt;
    use crate::domain::reservation::ReservationStatus;
    use crate::infrastructure::memory::InMemoryRepositoryProvider;

    fn deposit() -> Decimal {
        Decimal::new(1000, 2) // 10.00
    }

    fn base_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    fn service_at(
        repos: &Arc<InMemoryRepositoryProvider>,
        now: DateTime<Utc>,
    ) -> ReservationService {
        ReservationService::new(repos.clone(), Arc::new(FixedClock(now)), deposit())
    }

    struct Fixture {
        repos: Arc<InMemoryRepositoryProvider>,
        service: ReservationService,
        guest: Guest,
        court: TennisCourt,
    }

    async fn fixture() -> Fixture {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let service = service_at(&repos, base_now());
        let guest = repos
            .guests()
            .save(Guest::new("Roger", base_now()))
            .await
            .unwrap();
        let court = repos
            .courts()
            .save(TennisCourt::new("Centre Court", base_now()))
            .await
            .unwrap();
        Fixture {
            repos,
            service,
            guest,
            court,
        }
    }

    impl Fixture {
        /// Slot on the fixture court starting `minutes` after base_now().
        async fn slot_in_minutes(&self, minutes: i64) -> Schedule {
            self.repos
                .schedules()
                .save(Schedule::for_court(
                    self.court.id,
                    base_now() + Duration::minutes(minutes),
                ))
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn booking_creates_a_ready_reservation_holding_the_deposit() {
        let f = fixture().await;
        let slot = f.slot_in_minutes(120).await;

        let r = f.service.book(f.guest.id, slot.id).await.unwrap();

        assert_eq!(r.status, ReservationStatus::ReadyToPlay);
        assert_eq!(r.value, deposit());
        assert_eq!(r.refund_value, None);
        assert_eq!(r.previous_reservation_id, None);
        assert_eq!(f.service.find_by_id(r.id).await.unwrap().id, r.id);
    }

    #[tokio::test]
    async fn booking_requires_an_existing_guest_and_slot() {
        let f = fixture().await;
        let slot = f.slot_in_minutes(120).await;

        let err = f.service.book(999, slot.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Guest", .. }));

        let err = f.service.book(f.guest.id, 999).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "Schedule",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn booking_a_started_slot_is_rejected() {
        let f = fixture().await;
        // store the slot directly; the schedule service would refuse it too
        let slot = f
            .repos
            .schedules()
            .save(Schedule::for_court(
                f.court.id,
                base_now() - Duration::minutes(10),
            ))
            .await
            .unwrap();

        let err = f.service.book(f.guest.id, slot.id).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn double_booking_a_slot_conflicts_and_names_the_court() {
        let f = fixture().await;
        let slot = f.slot_in_minutes(180).await;
        f.service.book(f.guest.id, slot.id).await.unwrap();

        let err = f.service.book(f.guest.id, slot.id).await.unwrap_err();
        match err {
            DomainError::Conflict(msg) => assert!(msg.contains("Centre Court")),
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn a_cancelled_slot_can_be_booked_again() {
        let f = fixture().await;
        let slot = f.slot_in_minutes(180).await;
        let first = f.service.book(f.guest.id, slot.id).await.unwrap();
        f.service.cancel(first.id).await.unwrap();

        let second = f.service.book(f.guest.id, slot.id).await.unwrap();
        assert_eq!(second.status, ReservationStatus::ReadyToPlay);
        assert_ne!(second.id, first.id);
    }

    #[tokio::test]
    async fn cancelling_a_day_ahead_refunds_the_whole_deposit() {
        let f = fixture().await;
        let slot = f.slot_in_minutes(25 * 60).await;
        let r = f.service.book(f.guest.id, slot.id).await.unwrap();

        let cancelled = f.service.cancel(r.id).await.unwrap();

        assert_eq!(cancelled.status, ReservationStatus::Cancelled);
        assert_eq!(cancelled.refund_value, Some(deposit()));
        assert_eq!(cancelled.value, Decimal::ZERO);
    }

    #[tokio::test]
    async fn cancelling_under_two_hours_refunds_a_quarter() {
        let f = fixture().await;
        let slot = f.slot_in_minutes(59).await;
        let r = f.service.book(f.guest.id, slot.id).await.unwrap();

        let cancelled = f.service.cancel(r.id).await.unwrap();

        assert_eq!(cancelled.status, ReservationStatus::Cancelled);
        assert_eq!(cancelled.refund_value, Some(Decimal::new(250, 2)));
        assert_eq!(cancelled.value, Decimal::new(750, 2));
        assert_eq!(
            cancelled.value + cancelled.refund_value.unwrap(),
            deposit()
        );
    }

    #[tokio::test]
    async fn refund_tiers_follow_time_until_start() {
        // (minutes ahead, expected refund)
        for (minutes, refund) in [
            (1440, Decimal::new(1000, 2)),
            (13 * 60, Decimal::new(750, 2)),
            (7 * 60, Decimal::new(500, 2)),
            (119, Decimal::new(250, 2)),
        ] {
            let f = fixture().await;
            let slot = f.slot_in_minutes(minutes).await;
            let r = f.service.book(f.guest.id, slot.id).await.unwrap();

            let cancelled = f.service.cancel(r.id).await.unwrap();

            assert_eq!(cancelled.refund_value, Some(refund), "{minutes} minutes");
            assert_eq!(cancelled.value + refund, deposit(), "{minutes} minutes");
        }
    }

    #[tokio::test]
    async fn cancelling_twice_is_rejected() {
        let f = fixture().await;
        let slot = f.slot_in_minutes(180).await;
        let r = f.service.book(f.guest.id, slot.id).await.unwrap();
        f.service.cancel(r.id).await.unwrap();

        let err = f.service.cancel(r.id).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));

        // same for reschedule: the reservation left the ready state
        let err = f.service.reschedule(r.id, Some(999)).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn cancelling_after_the_slot_started_is_rejected() {
        let f = fixture().await;
        let slot = f.slot_in_minutes(60).await;
        let r = f.service.book(f.guest.id, slot.id).await.unwrap();

        // two hours later the slot has started
        let later = service_at(&f.repos, base_now() + Duration::hours(2));
        let err = later.cancel(r.id).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));

        // untouched
        let r = f.service.find_by_id(r.id).await.unwrap();
        assert_eq!(r.status, ReservationStatus::ReadyToPlay);
    }

    #[tokio::test]
    async fn missing_reservation_is_not_found() {
        let f = fixture().await;
        let err = f.service.find_by_id(42).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::NotFound {
                entity: "Reservation",
                ..
            }
        ));
        assert!(f.service.cancel(42).await.is_err());
        assert!(f.service.reschedule(42, Some(1)).await.is_err());
    }

    #[tokio::test]
    async fn rescheduling_to_the_same_slot_is_rejected() {
        let f = fixture().await;
        let slot = f.slot_in_minutes(180).await;
        let r = f.service.book(f.guest.id, slot.id).await.unwrap();

        let err = f.service.reschedule(r.id, Some(slot.id)).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));

        let r = f.service.find_by_id(r.id).await.unwrap();
        assert_eq!(r.status, ReservationStatus::ReadyToPlay);
    }

    #[tokio::test]
    async fn rescheduling_without_a_target_slot_is_rejected() {
        let f = fixture().await;
        let slot = f.slot_in_minutes(180).await;
        let r = f.service.book(f.guest.id, slot.id).await.unwrap();

        let err = f.service.reschedule(r.id, None).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidRequest(_)));
        assert_eq!(
            f.service.find_by_id(r.id).await.unwrap().status,
            ReservationStatus::ReadyToPlay
        );
    }

    #[tokio::test]
    async fn rescheduling_moves_the_booking_and_links_the_history() {
        let f = fixture().await;
        let slot_a = f.slot_in_minutes(7 * 60).await;
        let slot_b = f.slot_in_minutes(30 * 60).await;
        let original = f.service.book(f.guest.id, slot_a.id).await.unwrap();

        let replacement = f
            .service
            .reschedule(original.id, Some(slot_b.id))
            .await
            .unwrap();

        // old reservation settled at the 50% tier (7h ahead)
        let old = f.service.find_by_id(original.id).await.unwrap();
        assert_eq!(old.status, ReservationStatus::Rescheduled);
        assert_eq!(old.refund_value, Some(Decimal::new(500, 2)));
        assert_eq!(old.value, Decimal::new(500, 2));

        // replacement is a fresh full-deposit booking for the same guest
        assert_eq!(replacement.status, ReservationStatus::ReadyToPlay);
        assert_eq!(replacement.schedule_id, slot_b.id);
        assert_eq!(replacement.guest_id, f.guest.id);
        assert_eq!(replacement.value, deposit());
        assert_eq!(replacement.previous_reservation_id, Some(original.id));

        // slot A is free again
        assert!(f.service.book(f.guest.id, slot_a.id).await.is_ok());
    }

    #[tokio::test]
    async fn failed_replacement_booking_still_resolves_the_old_reservation() {
        let f = fixture().await;
        let slot_a = f.slot_in_minutes(7 * 60).await;
        let slot_b = f.slot_in_minutes(30 * 60).await;
        let original = f.service.book(f.guest.id, slot_a.id).await.unwrap();

        let rival = f
            .repos
            .guests()
            .save(Guest::new("Rafael", base_now()))
            .await
            .unwrap();
        f.service.book(rival.id, slot_b.id).await.unwrap();

        // the first step (settling the old reservation) committed before
        // the conflicting booking failed; that is the documented trade-off
        let err = f
            .service
            .reschedule(original.id, Some(slot_b.id))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let old = f.service.find_by_id(original.id).await.unwrap();
        assert_eq!(old.status, ReservationStatus::Rescheduled);
        assert_eq!(old.refund_value, Some(Decimal::new(500, 2)));
    }

    #[tokio::test]
    async fn history_lists_started_slots_only_regardless_of_status() {
        let f = fixture().await;
        let soon = f.slot_in_minutes(60).await;
        let later = f.slot_in_minutes(10 * 60).await;
        let played = f.service.book(f.guest.id, soon.id).await.unwrap();
        let upcoming = f.service.book(f.guest.id, later.id).await.unwrap();

        // nothing has started yet
        assert!(f.service.show_past_reservations().await.unwrap().is_empty());

        // two hours later only the first slot has started
        let later_service = service_at(&f.repos, base_now() + Duration::hours(2));
        let past = later_service.show_past_reservations().await.unwrap();
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].id, played.id);
        assert_ne!(past[0].id, upcoming.id);
    }
}
