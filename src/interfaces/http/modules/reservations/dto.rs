//! Reservation DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::Reservation;

/// Request to book a slot
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    /// Guest making the reservation
    #[validate(range(min = 1))]
    pub guest_id: i64,
    /// Schedule slot to book
    #[validate(range(min = 1))]
    pub schedule_id: i64,
}

/// Request to move a reservation to another slot.
///
/// `scheduleId` stays optional in the wire shape so a missing/null value
/// comes back as a 400 with a message instead of a deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleReservationRequest {
    pub schedule_id: Option<i64>,
}

/// Reservation details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i64,
    pub guest_id: i64,
    pub schedule_id: i64,
    pub status: String,
    /// Deposit amount still retained
    pub value: Decimal,
    /// Amount refunded on cancel/reschedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_value: Option<Decimal>,
    /// For rescheduled bookings: the reservation this one replaced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_reservation_id: Option<i64>,
    pub created_at: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            guest_id: r.guest_id,
            schedule_id: r.schedule_id,
            status: r.status.as_str().to_string(),
            value: r.value,
            refund_value: r.refund_value,
            previous_reservation_id: r.previous_reservation_id,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::reservation::ReservationStatus;

    #[test]
    fn dto_uses_camel_case_and_hides_unset_fields() {
        let mut r = Reservation::book(1, 2, Decimal::new(1000, 2), None, Utc::now());
        r.id = 5;
        let ready = serde_json::to_value(ReservationDto::from(r.clone())).unwrap();
        assert_eq!(ready["guestId"], 1);
        assert_eq!(ready["scheduleId"], 2);
        assert_eq!(ready["status"], "READY_TO_PLAY");
        assert!(ready.get("refundValue").is_none());

        r.settle(ReservationStatus::Cancelled, Decimal::new(250, 2));
        let cancelled = serde_json::to_value(ReservationDto::from(r)).unwrap();
        assert_eq!(cancelled["status"], "CANCELLED");
        assert_eq!(cancelled["refundValue"], "2.50");
        assert_eq!(cancelled["value"], "7.50");
    }
}
