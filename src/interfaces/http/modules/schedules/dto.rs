//! Schedule DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::schedule::Schedule;

/// Request to open a slot on a court
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    #[validate(range(min = 1))]
    pub tennis_court_id: i64,
    /// Slot start (ISO 8601); the end is fixed at start + play time
    #[validate(length(min = 1))]
    pub start_date_time: String,
}

/// Date range filter for the schedule list (inclusive days)
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListSchedulesParams {
    /// First day of the range (YYYY-MM-DD)
    pub start_date: String,
    /// Last day of the range (YYYY-MM-DD)
    pub end_date: String,
}

/// Schedule slot in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub id: i64,
    pub tennis_court_id: i64,
    pub start_date_time: String,
    pub end_date_time: String,
}

impl From<Schedule> for ScheduleDto {
    fn from(s: Schedule) -> Self {
        Self {
            id: s.id,
            tennis_court_id: s.tennis_court_id,
            start_date_time: s.start_date_time.to_rfc3339(),
            end_date_time: s.end_date_time.to_rfc3339(),
        }
    }
}
