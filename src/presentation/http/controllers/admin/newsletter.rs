// src/presentation/http/controllers/admin/newsletter.rs
use super::BulkActionRequest;
use crate::application::{
    commands::newsletter::{ReplacePreferencesCommand, SetSubscribersActiveCommand},
    dto::{BulkResultDto, NewsletterPreferenceDto, SubscriberDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/admin/api/newsletter/subscribers",
    responses(
        (status = 200, description = "Subscribers, newest first.", body = [SubscriberDto]),
        (status = 403, description = "Requires newsletter:manage.", body = ErrorResponse)
    ),
    tag = "Newsletter"
)]
pub async fn list_subscribers(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<SubscriberDto>>> {
    state
        .services
        .newsletter_queries
        .list_subscribers(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/api/newsletter/subscribers/bulk",
    request_body = BulkActionRequest,
    responses(
        (status = 200, description = "Action applied: activate or deactivate.", body = BulkResultDto),
        (status = 400, description = "Unknown action.", body = ErrorResponse)
    ),
    tag = "Newsletter"
)]
pub async fn bulk_subscribers(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<BulkActionRequest>,
) -> HttpResult<Json<BulkResultDto>> {
    state
        .services
        .newsletter_commands
        .set_active(
            &user,
            SetSubscribersActiveCommand {
                ids: payload.ids,
                action: payload.action,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/admin/api/newsletter/subscribers/{id}/preferences",
    params(("id" = i64, Path, description = "Subscriber id")),
    responses(
        (status = 200, description = "Topic preferences.", body = NewsletterPreferenceDto),
        (status = 404, description = "No such subscriber.", body = ErrorResponse)
    ),
    tag = "Newsletter"
)]
pub async fn get_preferences(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<NewsletterPreferenceDto>> {
    state
        .services
        .newsletter_queries
        .get_preferences(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/admin/api/newsletter/subscribers/{id}/preferences",
    params(("id" = i64, Path, description = "Subscriber id")),
    request_body = NewsletterPreferenceDto,
    responses(
        (status = 200, description = "Stored preferences.", body = NewsletterPreferenceDto),
        (status = 404, description = "No such subscriber.", body = ErrorResponse)
    ),
    tag = "Newsletter"
)]
pub async fn replace_preferences(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(preferences): Json<NewsletterPreferenceDto>,
) -> HttpResult<Json<NewsletterPreferenceDto>> {
    state
        .services
        .newsletter_commands
        .replace_preferences(
            &user,
            ReplacePreferencesCommand {
                subscriber_id: id,
                preferences,
            },
        )
        .await
        .into_http()
        .map(Json)
}
