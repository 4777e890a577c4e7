//! Schedule domain entity

use chrono::{DateTime, Duration, Utc};

/// Fixed slot length for a booked court.
pub const PLAY_TIME_HOURS: i64 = 1;

/// A bookable time slot on one court.
#[derive(Debug, Clone)]
pub struct Schedule {
    /// Unique schedule ID, assigned by the store on insert (0 = unsaved)
    pub id: i64,
    pub tennis_court_id: i64,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
}

impl Schedule {
    /// New slot on a court; the end time is fixed at start + play time.
    pub fn for_court(tennis_court_id: i64, start_date_time: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            tennis_court_id,
            start_date_time,
            end_date_time: start_date_time + Duration::hours(PLAY_TIME_HOURS),
        }
    }

    /// Whole minutes between `now` and the slot start, truncating.
    /// Negative once the slot has started.
    pub fn minutes_until_start(&self, now: DateTime<Utc>) -> i64 {
        (self.start_date_time - now).num_minutes()
    }

    /// A slot is bookable/cancellable only while its start is strictly in
    /// the future.
    pub fn starts_after(&self, now: DateTime<Utc>) -> bool {
        self.start_date_time > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_runs_for_the_fixed_play_time() {
        let start = Utc::now() + Duration::hours(3);
        let slot = Schedule::for_court(1, start);
        assert_eq!(slot.end_date_time - slot.start_date_time, Duration::hours(1));
    }

    #[test]
    fn minutes_until_start_truncates_whole_minutes() {
        let now = Utc::now();
        let slot = Schedule::for_court(1, now + Duration::seconds(59 * 60 + 30));
        assert_eq!(slot.minutes_until_start(now), 59);

        let started = Schedule::for_court(1, now - Duration::minutes(5));
        assert_eq!(started.minutes_until_start(now), -5);
    }

    #[test]
    fn starts_after_is_strict() {
        let now = Utc::now();
        assert!(Schedule::for_court(1, now + Duration::minutes(1)).starts_after(now));
        assert!(!Schedule::for_court(1, now).starts_after(now));
        assert!(!Schedule::for_court(1, now - Duration::minutes(1)).starts_after(now));
    }
}
