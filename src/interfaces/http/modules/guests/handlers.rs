//! Guest directory handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::Json;

use crate::application::GuestService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for guest handlers.
#[derive(Clone)]
pub struct GuestAppState {
    pub service: Arc<GuestService>,
}

type HandlerError<T> = (StatusCode, Json<ApiResponse<T>>);

#[utoipa::path(
    post,
    path = "/guests",
    tag = "Guests",
    request_body = CreateGuestRequest,
    responses(
        (status = 201, description = "Guest added", body = ApiResponse<GuestDto>,
         headers(("Location" = String, description = "URL of the new guest")))
    )
)]
pub async fn add_guest(
    State(state): State<GuestAppState>,
    ValidatedJson(request): ValidatedJson<CreateGuestRequest>,
) -> Result<
    (
        StatusCode,
        [(header::HeaderName, String); 1],
        Json<ApiResponse<GuestDto>>,
    ),
    HandlerError<GuestDto>,
> {
    let guest = state
        .service
        .add_guest(&request.name)
        .await
        .map_err(domain_error_response)?;

    let location = format!("/guests/{}", guest.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResponse::success(GuestDto::from(guest))),
    ))
}

#[utoipa::path(
    get,
    path = "/guests/{id}",
    tag = "Guests",
    params(("id" = i64, Path, description = "Guest ID")),
    responses(
        (status = 200, description = "Guest details", body = ApiResponse<GuestDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn find_guest(
    State(state): State<GuestAppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<GuestDto>>, HandlerError<GuestDto>> {
    let guest = state
        .service
        .find_guest_by_id(id)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(GuestDto::from(guest))))
}

#[utoipa::path(
    get,
    path = "/guests",
    tag = "Guests",
    params(ListGuestsParams),
    responses(
        (status = 200, description = "Guest list", body = ApiResponse<Vec<GuestDto>>)
    )
)]
pub async fn list_guests(
    State(state): State<GuestAppState>,
    Query(params): Query<ListGuestsParams>,
) -> Result<Json<ApiResponse<Vec<GuestDto>>>, HandlerError<Vec<GuestDto>>> {
    let guests = state
        .service
        .list_guests(params.name.as_deref())
        .await
        .map_err(domain_error_response)?;

    let dtos: Vec<GuestDto> = guests.into_iter().map(GuestDto::from).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

#[utoipa::path(
    put,
    path = "/guests",
    tag = "Guests",
    request_body = UpdateGuestRequest,
    responses(
        (status = 200, description = "Guest updated", body = ApiResponse<GuestDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_guest(
    State(state): State<GuestAppState>,
    ValidatedJson(request): ValidatedJson<UpdateGuestRequest>,
) -> Result<Json<ApiResponse<GuestDto>>, HandlerError<GuestDto>> {
    let guest = state
        .service
        .update_guest(request.id, &request.name)
        .await
        .map_err(domain_error_response)?;
    Ok(Json(ApiResponse::success(GuestDto::from(guest))))
}

#[utoipa::path(
    delete,
    path = "/guests/{id}",
    tag = "Guests",
    params(("id" = i64, Path, description = "Guest ID")),
    responses(
        (status = 204, description = "Guest deleted"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_guest(
    State(state): State<GuestAppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HandlerError<()>> {
    state
        .service
        .delete_guest(id)
        .await
        .map_err(domain_error_response)?;
    Ok(StatusCode::NO_CONTENT)
}
