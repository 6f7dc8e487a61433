// src/presentation/http/controllers/admin/authors.rs
use super::double_option;
use crate::application::{
    commands::authors::{CreateAuthorCommand, UpdateAuthorCommand, UpdateProfileCommand},
    dto::{AuthorAdminDto, AuthorProfileDto},
};
use crate::domain::author::Role;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthorRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub profile: Option<AuthorProfileDto>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateAuthorRequest {
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub profile_image: Option<Option<String>>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
    pub password: Option<String>,
}

#[utoipa::path(
    get,
    path = "/admin/api/authors",
    responses(
        (status = 200, description = "Every author, newest first.", body = [AuthorAdminDto]),
        (status = 403, description = "Requires authors:manage.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn list_authors(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<AuthorAdminDto>>> {
    state
        .services
        .author_queries
        .list_for_console(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/api/authors",
    request_body = CreateAuthorRequest,
    responses(
        (status = 201, description = "Author created with an empty profile.", body = AuthorAdminDto),
        (status = 400, description = "Invalid username, email or password.", body = ErrorResponse),
        (status = 409, description = "Username already taken.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn create_author(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateAuthorRequest>,
) -> HttpResult<(StatusCode, Json<AuthorAdminDto>)> {
    let command = CreateAuthorCommand {
        username: payload.username,
        password: payload.password,
        email: payload.email,
        first_name: payload.first_name,
        last_name: payload.last_name,
        bio: payload.bio,
        profile_image: payload.profile_image,
        role: payload.role,
        is_active: payload.is_active,
        profile: payload.profile,
    };

    let created = state
        .services
        .author_commands
        .create_author(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/admin/api/authors/{id}",
    params(("id" = i64, Path, description = "Author id")),
    request_body = UpdateAuthorRequest,
    responses(
        (status = 200, description = "Updated author.", body = AuthorAdminDto),
        (status = 404, description = "No such author.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn update_author(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAuthorRequest>,
) -> HttpResult<Json<AuthorAdminDto>> {
    let command = UpdateAuthorCommand {
        id,
        email: payload.email,
        first_name: payload.first_name,
        last_name: payload.last_name,
        bio: payload.bio,
        profile_image: payload.profile_image,
        role: payload.role,
        is_active: payload.is_active,
        password: payload.password,
    };

    state
        .services
        .author_commands
        .update_author(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/admin/api/authors/{id}/profile",
    params(("id" = i64, Path, description = "Author id")),
    request_body = AuthorProfileDto,
    responses(
        (status = 200, description = "Stored social links.", body = AuthorProfileDto),
        (status = 404, description = "No such author.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(profile): Json<AuthorProfileDto>,
) -> HttpResult<Json<AuthorProfileDto>> {
    state
        .services
        .author_commands
        .update_profile(
            &user,
            UpdateProfileCommand {
                author_id: id,
                profile,
            },
        )
        .await
        .into_http()
        .map(Json)
}
