//! Schedule slot handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::Json;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::application::ScheduleService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for schedule handlers.
#[derive(Clone)]
pub struct ScheduleAppState {
    pub service: Arc<ScheduleService>,
}

type HandlerError<T> = (StatusCode, Json<ApiResponse<T>>);

fn bad_request<T>(message: String) -> HandlerError<T> {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

#[utoipa::path(
    post,
    path = "/schedules",
    tag = "Schedules",
    request_body = CreateScheduleRequest,
    responses(
        (status = 201, description = "Slot opened", body = ApiResponse<ScheduleDto>,
         headers(("Location" = String, description = "URL of the new slot"))),
        (status = 404, description = "Court not found"),
        (status = 409, description = "Court already has a slot at that start time"),
        (status = 400, description = "Missing or past start time")
    )
)]
pub async fn add_schedule(
    State(state): State<ScheduleAppState>,
    ValidatedJson(request): ValidatedJson<CreateScheduleRequest>,
) -> Result<
    (
        StatusCode,
        [(header::HeaderName, String); 1],
        Json<ApiResponse<ScheduleDto>>,
    ),
    HandlerError<ScheduleDto>,
> {
    let start = DateTime::parse_from_rfc3339(&request.start_date_time)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| bad_request(format!("Invalid startDateTime: {}", e)))?;

    let schedule = state
        .service
        .add_schedule(request.tennis_court_id, start)
        .await
        .map_err(domain_error_response)?;

    let location = format!("/schedules/{}", schedule.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(ScheduleDto::from(schedule))),
    ))
}

#[utoipa::path(
    get,
    path = "/schedules/{id}",
    tag = "Schedules",
    params(("id" = i64, Path, description = "Schedule ID")),
    responses(
        (status = 200, description = "Slot details", body = ApiResponse<ScheduleDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn find_schedule(
    State(state): State<ScheduleAppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ScheduleDto>>, HandlerError<ScheduleDto>> {
    let schedule = state
        .service
        .find_schedule(id)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(ScheduleDto::from(schedule))))
}

#[utoipa::path(
    get,
    path = "/schedules",
    tag = "Schedules",
    params(ListSchedulesParams),
    responses(
        (status = 200, description = "Slots within the date range", body = ApiResponse<Vec<ScheduleDto>>),
        (status = 400, description = "Malformed date")
    )
)]
pub async fn find_schedules_by_dates(
    State(state): State<ScheduleAppState>,
    Query(params): Query<ListSchedulesParams>,
) -> Result<Json<ApiResponse<Vec<ScheduleDto>>>, HandlerError<Vec<ScheduleDto>>> {
    let start_day = NaiveDate::parse_from_str(&params.start_date, "%Y-%m-%d")
        .map_err(|e| bad_request(format!("Invalid startDate: {}", e)))?;
    let end_day = NaiveDate::parse_from_str(&params.end_date, "%Y-%m-%d")
        .map_err(|e| bad_request(format!("Invalid endDate: {}", e)))?;

    let start = start_day.and_time(NaiveTime::MIN).and_utc();
    let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).expect("literal time");
    let end = end_day.and_time(end_of_day).and_utc();

    let schedules = state
        .service
        .find_schedules_by_dates(start, end)
        .await
        .map_err(domain_error_response)?;

    let dtos: Vec<ScheduleDto> = schedules.into_iter().map(ScheduleDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
