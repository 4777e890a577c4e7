//! Guest DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::guest::Guest;

/// Request to add a guest
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGuestRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Request to rename an existing guest
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGuestRequest {
    #[validate(range(min = 1))]
    pub id: i64,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

/// Optional exact-name filter for the guest list
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListGuestsParams {
    pub name: Option<String>,
}

/// Guest details in API responses
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuestDto {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

impl From<Guest> for GuestDto {
    fn from(g: Guest) -> Self {
        Self {
            id: g.id,
            name: g.name,
            created_at: g.created_at.to_rfc3339(),
        }
    }
}
