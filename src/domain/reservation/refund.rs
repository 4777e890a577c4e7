//! Deposit refund policy
//!
//! The refund fraction decays with the time remaining before the slot
//! starts. Tier lower bounds are inclusive: exactly 24h before start still
//! refunds 100%, exactly 12h still 75%, and so on.

use rust_decimal::Decimal;

const FULL_REFUND_MIN: i64 = 24 * 60;
const THREE_QUARTERS_REFUND_MIN: i64 = 12 * 60;
const HALF_REFUND_MIN: i64 = 2 * 60;

/// Refundable amount for a reservation currently worth `current_value`,
/// `minutes_until_start` whole minutes before its slot begins.
///
/// Pure and total: past or imminent slots (< 1 minute) refund zero, never
/// an error. Decimal arithmetic keeps `value + refund == deposit` exact.
pub fn refund_amount(current_value: Decimal, minutes_until_start: i64) -> Decimal {
    if minutes_until_start >= FULL_REFUND_MIN {
        current_value
    } else if minutes_until_start >= THREE_QUARTERS_REFUND_MIN {
        current_value * Decimal::new(75, 2)
    } else if minutes_until_start >= HALF_REFUND_MIN {
        current_value * Decimal::new(50, 2)
    } else if minutes_until_start >= 1 {
        current_value * Decimal::new(25, 2)
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deposit() -> Decimal {
        Decimal::new(1000, 2) // 10.00
    }

    #[test]
    fn full_refund_at_or_beyond_24h() {
        assert_eq!(refund_amount(deposit(), 1440), deposit());
        assert_eq!(refund_amount(deposit(), 1500), deposit());
        assert_eq!(refund_amount(deposit(), 10_000), deposit());
    }

    #[test]
    fn three_quarters_between_12h_and_24h() {
        let expected = Decimal::new(750, 2); // 7.50
        assert_eq!(refund_amount(deposit(), 1439), expected);
        assert_eq!(refund_amount(deposit(), 720), expected);
    }

    #[test]
    fn half_between_2h_and_12h() {
        let expected = Decimal::new(500, 2); // 5.00
        assert_eq!(refund_amount(deposit(), 719), expected);
        assert_eq!(refund_amount(deposit(), 120), expected);
    }

    #[test]
    fn quarter_between_1min_and_2h() {
        let expected = Decimal::new(250, 2); // 2.50
        assert_eq!(refund_amount(deposit(), 119), expected);
        assert_eq!(refund_amount(deposit(), 59), expected);
        assert_eq!(refund_amount(deposit(), 1), expected);
    }

    #[test]
    fn nothing_for_started_or_imminent_slots() {
        assert_eq!(refund_amount(deposit(), 0), Decimal::ZERO);
        assert_eq!(refund_amount(deposit(), -30), Decimal::ZERO);
    }

    #[test]
    fn refund_plus_remainder_is_exact() {
        for minutes in [1440, 1439, 719, 119, 0] {
            let refund = refund_amount(deposit(), minutes);
            assert_eq!((deposit() - refund) + refund, deposit());
        }
    }
}
