//! Reservation HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::Json;

use crate::application::ReservationService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for reservation handlers.
#[derive(Clone)]
pub struct ReservationAppState {
    pub service: Arc<ReservationService>,
}

type HandlerError<T> = (StatusCode, Json<ApiResponse<T>>);

#[utoipa::path(
    post,
    path = "/reservations",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation booked", body = ApiResponse<ReservationDto>,
         headers(("Location" = String, description = "URL of the new reservation"))),
        (status = 404, description = "Guest or schedule not found"),
        (status = 409, description = "Slot already has a ready-to-play reservation"),
        (status = 400, description = "Slot already started")
    )
)]
pub async fn book_reservation(
    State(state): State<ReservationAppState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<
    (
        StatusCode,
        [(header::HeaderName, String); 1],
        Json<ApiResponse<ReservationDto>>,
    ),
    HandlerError<ReservationDto>,
> {
    let reservation = state
        .service
        .book(request.guest_id, request.schedule_id)
        .await
        .map_err(domain_error_response)?;

    let location = format!("/reservations/{}", reservation.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(ReservationDto::from(reservation))),
    ))
}

#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = "Reservations",
    params(("id" = i64, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn find_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReservationDto>>, HandlerError<ReservationDto>> {
    let reservation = state
        .service
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(ReservationDto::from(reservation))))
}

#[utoipa::path(
    put,
    path = "/reservations/{id}/cancel",
    tag = "Reservations",
    params(("id" = i64, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation cancelled", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found"),
        (status = 400, description = "Not ready-to-play, or slot already started")
    )
)]
pub async fn cancel_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReservationDto>>, HandlerError<ReservationDto>> {
    let reservation = state
        .service
        .cancel(id)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(ReservationDto::from(reservation))))
}

#[utoipa::path(
    put,
    path = "/reservations/{id}",
    tag = "Reservations",
    params(("id" = i64, Path, description = "Reservation ID")),
    request_body = RescheduleReservationRequest,
    responses(
        (status = 200, description = "Replacement reservation", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Target slot already taken"),
        (status = 400, description = "Missing or same target slot, or slot already started")
    )
)]
pub async fn reschedule_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<i64>,
    Json(request): Json<RescheduleReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, HandlerError<ReservationDto>> {
    let reservation = state
        .service
        .reschedule(id, request.schedule_id)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(ReservationDto::from(reservation))))
}

#[utoipa::path(
    get,
    path = "/reservations/history",
    tag = "Reservations",
    responses(
        (status = 200, description = "Reservations whose slot already started", body = ApiResponse<Vec<ReservationDto>>)
    )
)]
pub async fn show_past_reservations(
    State(state): State<ReservationAppState>,
) -> Result<Json<ApiResponse<Vec<ReservationDto>>>, HandlerError<Vec<ReservationDto>>> {
    let reservations = state
        .service
        .show_past_reservations()
        .await
        .map_err(domain_error_response)?;

    let dtos: Vec<ReservationDto> = reservations.into_iter().map(ReservationDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}
