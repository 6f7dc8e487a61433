// src/presentation/http/controllers/admin/vlogs.rs
use super::{BulkActionRequest, StatusResponse, double_option};
use crate::application::{
    commands::vlogs::{BulkVlogCommand, CreateVlogCommand, UpdateVlogCommand},
    dto::{BulkResultDto, Page, VlogDto},
};
use crate::presentation::http::controllers::PageParams;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateVlogRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub author_id: Option<i64>,
    pub category_id: i64,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateVlogRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub video_url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub thumbnail: Option<Option<String>>,
    pub author_id: Option<i64>,
    pub category_id: Option<i64>,
    pub is_published: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/admin/api/vlogs",
    params(("page" = Option<String>, Query, description = "Page number")),
    responses(
        (status = 200, description = "Vlogs, 25 per page.", body = Page<VlogDto>),
        (status = 403, description = "Requires vlogs:manage.", body = ErrorResponse)
    ),
    tag = "Vlogs"
)]
pub async fn list_vlogs(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<Page<VlogDto>>> {
    state
        .services
        .vlog_queries
        .list_for_console(&user, params.page)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/api/vlogs",
    request_body = CreateVlogRequest,
    responses(
        (status = 201, description = "Vlog created.", body = VlogDto),
        (status = 409, description = "Slug already in use.", body = ErrorResponse)
    ),
    tag = "Vlogs"
)]
pub async fn create_vlog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateVlogRequest>,
) -> HttpResult<(StatusCode, Json<VlogDto>)> {
    let command = CreateVlogCommand {
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
        video_url: payload.video_url,
        thumbnail: payload.thumbnail,
        author_id: payload.author_id,
        category_id: payload.category_id,
        is_published: payload.is_published,
    };
    let created = state
        .services
        .vlog_commands
        .create_vlog(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/admin/api/vlogs/{id}",
    params(("id" = i64, Path, description = "Vlog id")),
    request_body = UpdateVlogRequest,
    responses(
        (status = 200, description = "Updated vlog.", body = VlogDto),
        (status = 404, description = "No such vlog.", body = ErrorResponse)
    ),
    tag = "Vlogs"
)]
pub async fn update_vlog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateVlogRequest>,
) -> HttpResult<Json<VlogDto>> {
    let command = UpdateVlogCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        description: payload.description,
        video_url: payload.video_url,
        thumbnail: payload.thumbnail,
        author_id: payload.author_id,
        category_id: payload.category_id,
        is_published: payload.is_published,
    };
    state
        .services
        .vlog_commands
        .update_vlog(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/admin/api/vlogs/{id}",
    params(("id" = i64, Path, description = "Vlog id")),
    responses(
        (status = 200, description = "Deleted.", body = StatusResponse),
        (status = 404, description = "No such vlog.", body = ErrorResponse)
    ),
    tag = "Vlogs"
)]
pub async fn delete_vlog(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .vlog_commands
        .delete_vlog(&user, id)
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}

#[utoipa::path(
    post,
    path = "/admin/api/vlogs/bulk",
    request_body = BulkActionRequest,
    responses(
        (status = 200, description = "Action applied: publish or unpublish.", body = BulkResultDto),
        (status = 400, description = "Unknown action.", body = ErrorResponse)
    ),
    tag = "Vlogs"
)]
pub async fn bulk_vlogs(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<BulkActionRequest>,
) -> HttpResult<Json<BulkResultDto>> {
    state
        .services
        .vlog_commands
        .apply_bulk(
            &user,
            BulkVlogCommand {
                ids: payload.ids,
                action: payload.action,
            },
        )
        .await
        .into_http()
        .map(Json)
}
