//! Reservation domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::error::DomainError;
use crate::domain::repositories::DomainResult;

/// Reservation status
///
/// `Cancelled` and `Rescheduled` are terminal; the only legal transitions
/// are `ReadyToPlay -> Cancelled` and `ReadyToPlay -> Rescheduled`, both
/// driven through [`ReservationStatus::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    /// Active reservation, slot not yet resolved
    ReadyToPlay,
    /// Cancelled by the guest, deposit settled
    Cancelled,
    /// Replaced by a reservation for another slot
    Rescheduled,
}

/// How a ready reservation leaves the active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionAction {
    Cancel,
    Reschedule,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadyToPlay => "READY_TO_PLAY",
            Self::Cancelled => "CANCELLED",
            Self::Rescheduled => "RESCHEDULED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "READY_TO_PLAY" => Some(Self::ReadyToPlay),
            "CANCELLED" => Some(Self::Cancelled),
            "RESCHEDULED" => Some(Self::Rescheduled),
            _ => None,
        }
    }

    /// The single transition authority: maps `(current, action)` to the next
    /// status, or fails when the reservation is no longer active.
    pub fn resolve(self, action: ResolutionAction) -> DomainResult<ReservationStatus> {
        match self {
            Self::ReadyToPlay => Ok(match action {
                ResolutionAction::Cancel => Self::Cancelled,
                ResolutionAction::Reschedule => Self::Rescheduled,
            }),
            _ => Err(DomainError::InvalidRequest(
                "cannot cancel/reschedule because it's not in ready to play status".to_string(),
            )),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Court slot reservation
#[derive(Debug, Clone)]
pub struct Reservation {
    /// Unique reservation ID, assigned by the store on insert (0 = unsaved)
    pub id: i64,
    /// Guest holding the reservation
    pub guest_id: i64,
    /// Reserved schedule slot
    pub schedule_id: i64,
    /// Current status
    pub status: ReservationStatus,
    /// Deposit amount still retained by the reservation
    pub value: Decimal,
    /// Amount returned to the guest on cancel/reschedule
    pub refund_value: Option<Decimal>,
    /// For reservations created via reschedule: the reservation replaced.
    /// One-way historical link, set once at creation, never mutated.
    pub previous_reservation_id: Option<i64>,
    /// When the reservation was created
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn book(
        guest_id: i64,
        schedule_id: i64,
        deposit: Decimal,
        previous_reservation_id: Option<i64>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            guest_id,
            schedule_id,
            status: ReservationStatus::ReadyToPlay,
            value: deposit,
            refund_value: None,
            previous_reservation_id,
            created_at,
        }
    }

    pub fn is_ready_to_play(&self) -> bool {
        self.status == ReservationStatus::ReadyToPlay
    }

    /// Settle the deposit and move to a terminal status.
    ///
    /// Splits the retained value into refund (returned to the guest) and
    /// fee (kept), so `value + refund_value` always equals the original
    /// deposit. `status` must come from [`ReservationStatus::resolve`].
    pub fn settle(&mut self, status: ReservationStatus, refund: Decimal) {
        self.value -= refund;
        self.refund_value = Some(refund);
        self.status = status;
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reservation() -> Reservation {
        Reservation::book(1, 7, Decimal::new(1000, 2), None, Utc::now())
    }

    #[test]
    fn booked_reservation_is_ready_to_play() {
        let r = sample_reservation();
        assert!(r.is_ready_to_play());
        assert_eq!(r.value, Decimal::new(1000, 2));
        assert_eq!(r.refund_value, None);
        assert_eq!(r.previous_reservation_id, None);
    }

    #[test]
    fn ready_resolves_to_cancelled_or_rescheduled() {
        let ready = ReservationStatus::ReadyToPlay;
        assert_eq!(
            ready.resolve(ResolutionAction::Cancel).unwrap(),
            ReservationStatus::Cancelled
        );
        assert_eq!(
            ready.resolve(ResolutionAction::Reschedule).unwrap(),
            ReservationStatus::Rescheduled
        );
    }

    #[test]
    fn terminal_statuses_do_not_resolve() {
        for status in [ReservationStatus::Cancelled, ReservationStatus::Rescheduled] {
            for action in [ResolutionAction::Cancel, ResolutionAction::Reschedule] {
                assert!(status.resolve(action).is_err());
            }
        }
    }

    #[test]
    fn settle_conserves_the_deposit() {
        let mut r = sample_reservation();
        let deposit = r.value;
        let refund = Decimal::new(750, 2);

        r.settle(ReservationStatus::Cancelled, refund);

        assert_eq!(r.status, ReservationStatus::Cancelled);
        assert_eq!(r.refund_value, Some(refund));
        assert_eq!(r.value + r.refund_value.unwrap(), deposit);
    }

    #[test]
    fn status_string_roundtrip() {
        for status in [
            ReservationStatus::ReadyToPlay,
            ReservationStatus::Cancelled,
            ReservationStatus::Rescheduled,
        ] {
            assert_eq!(ReservationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ReservationStatus::parse("EXPIRED"), None);
    }
}
