//! Tennis court DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::court::TennisCourt;
use crate::domain::schedule::Schedule;
use crate::interfaces::http::modules::schedules::dto::ScheduleDto;

/// Request to add a court
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCourtRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Court details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourtDto {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

impl From<TennisCourt> for CourtDto {
    fn from(c: TennisCourt) -> Self {
        Self {
            id: c.id,
            name: c.name,
            created_at: c.created_at.to_rfc3339(),
        }
    }
}

/// Court together with all its slots
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourtWithSchedulesDto {
    pub id: i64,
    pub name: String,
    pub schedules: Vec<ScheduleDto>,
}

impl CourtWithSchedulesDto {
    pub fn new(court: TennisCourt, schedules: Vec<Schedule>) -> Self {
        Self {
            id: court.id,
            name: court.name,
            schedules: schedules.into_iter().map(ScheduleDto::from).collect(),
        }
    }
}
