// src/presentation/http/controllers/admin/auth.rs
use crate::application::{
    commands::authors::LoginCommand,
    dto::{AuthTokenDto, AuthorAdminDto},
};
use crate::domain::author::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: AuthTokenDto,
    pub author: AuthorAdminDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub id: i64,
    pub username: String,
    pub role: Role,
    /// `resource:action` pairs, sorted.
    pub capabilities: Vec<String>,
    pub expires_at: DateTime<Utc>,
}

#[utoipa::path(
    post,
    path = "/admin/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued.", body = LoginResponse),
        (status = 401, description = "Unknown user or wrong password.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Account disabled.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let result = state
        .services
        .author_commands
        .login(LoginCommand {
            username: payload.username,
            password: payload.password,
        })
        .await
        .into_http()?;

    Ok(Json(LoginResponse {
        token: result.token,
        author: result.author,
    }))
}

#[utoipa::path(
    get,
    path = "/admin/api/me",
    responses(
        (status = 200, description = "The token's holder.", body = SessionResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn me(Authenticated(user): Authenticated) -> Json<SessionResponse> {
    let mut capabilities: Vec<String> = user
        .capabilities
        .iter()
        .map(|cap| format!("{}:{}", cap.resource, cap.action))
        .collect();
    capabilities.sort();

    Json(SessionResponse {
        id: user.id.into(),
        username: user.username,
        role: user.role,
        capabilities,
        expires_at: user.expires_at,
    })
}
