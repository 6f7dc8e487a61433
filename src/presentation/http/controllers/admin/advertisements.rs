// src/presentation/http/controllers/admin/advertisements.rs
use super::StatusResponse;
use crate::application::{commands::advertisements::AdvertisementCommand, dto::AdvertisementDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

fn default_true() -> bool {
    true
}

/// Full advertisement body; updates replace every field.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AdvertisementRequest {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub priority: i32,
}

impl From<AdvertisementRequest> for AdvertisementCommand {
    fn from(request: AdvertisementRequest) -> Self {
        Self {
            title: request.title,
            image: request.image,
            link: request.link,
            content: request.content,
            is_active: request.is_active,
            start_date: request.start_date,
            end_date: request.end_date,
            priority: request.priority,
        }
    }
}

#[utoipa::path(
    get,
    path = "/admin/api/advertisements",
    responses(
        (status = 200, description = "All advertisements by priority.", body = [AdvertisementDto]),
        (status = 403, description = "Requires advertisements:manage.", body = ErrorResponse)
    ),
    tag = "Advertisements"
)]
pub async fn list_advertisements(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<AdvertisementDto>>> {
    state
        .services
        .advertisement_queries
        .list_for_console(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/api/advertisements",
    request_body = AdvertisementRequest,
    responses(
        (status = 201, description = "Advertisement created.", body = AdvertisementDto),
        (status = 400, description = "End date before start date.", body = ErrorResponse)
    ),
    tag = "Advertisements"
)]
pub async fn create_advertisement(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<AdvertisementRequest>,
) -> HttpResult<(StatusCode, Json<AdvertisementDto>)> {
    let created = state
        .services
        .advertisement_commands
        .create_advertisement(&user, payload.into())
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/admin/api/advertisements/{id}",
    params(("id" = i64, Path, description = "Advertisement id")),
    request_body = AdvertisementRequest,
    responses(
        (status = 200, description = "Replaced advertisement.", body = AdvertisementDto),
        (status = 404, description = "No such advertisement.", body = ErrorResponse)
    ),
    tag = "Advertisements"
)]
pub async fn update_advertisement(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<AdvertisementRequest>,
) -> HttpResult<Json<AdvertisementDto>> {
    state
        .services
        .advertisement_commands
        .update_advertisement(&user, id, payload.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/admin/api/advertisements/{id}",
    params(("id" = i64, Path, description = "Advertisement id")),
    responses(
        (status = 200, description = "Deleted.", body = StatusResponse),
        (status = 404, description = "No such advertisement.", body = ErrorResponse)
    ),
    tag = "Advertisements"
)]
pub async fn delete_advertisement(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .advertisement_commands
        .delete_advertisement(&user, id)
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}
