//! Tennis court handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::Json;

use crate::application::CourtService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for court handlers.
#[derive(Clone)]
pub struct CourtAppState {
    pub service: Arc<CourtService>,
}

type HandlerError<T> = (StatusCode, Json<ApiResponse<T>>);

#[utoipa::path(
    post,
    path = "/courts",
    tag = "Courts",
    request_body = CreateCourtRequest,
    responses(
        (status = 201, description = "Court added", body = ApiResponse<CourtDto>,
         headers(("Location" = String, description = "URL of the new court")))
    )
)]
pub async fn add_court(
    State(state): State<CourtAppState>,
    ValidatedJson(request): ValidatedJson<CreateCourtRequest>,
) -> Result<
    (
        StatusCode,
        [(header::HeaderName, String); 1],
        Json<ApiResponse<CourtDto>>,
    ),
    HandlerError<CourtDto>,
> {
    let court = state
        .service
        .add_court(&request.name)
        .await
        .map_err(domain_error_response)?;

    let location = format!("/courts/{}", court.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(CourtDto::from(court))),
    ))
}

#[utoipa::path(
    get,
    path = "/courts/{id}",
    tag = "Courts",
    params(("id" = i64, Path, description = "Court ID")),
    responses(
        (status = 200, description = "Court details", body = ApiResponse<CourtDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn find_court(
    State(state): State<CourtAppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CourtDto>>, HandlerError<CourtDto>> {
    let court = state
        .service
        .find_court_by_id(id)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(CourtDto::from(court))))
}

#[utoipa::path(
    get,
    path = "/courts/{id}/schedules",
    tag = "Courts",
    params(("id" = i64, Path, description = "Court ID")),
    responses(
        (status = 200, description = "Court with its slots", body = ApiResponse<CourtWithSchedulesDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn find_court_with_schedules(
    State(state): State<CourtAppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<CourtWithSchedulesDto>>, HandlerError<CourtWithSchedulesDto>> {
    let (court, schedules) = state
        .service
        .find_court_with_schedules(id)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(CourtWithSchedulesDto::new(
        court, schedules,
    ))))
}
