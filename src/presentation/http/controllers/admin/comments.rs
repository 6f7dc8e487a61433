// src/presentation/http/controllers/admin/comments.rs
use super::{BulkActionRequest, StatusResponse};
use crate::application::{
    commands::comments::ModerateCommentsCommand,
    dto::{BulkResultDto, CommentAdminDto},
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListParams {
    /// Only approved (`true`) or only pending (`false`) comments.
    pub approved: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/admin/api/comments",
    params(CommentListParams),
    responses(
        (status = 200, description = "Comments, newest first.", body = [CommentAdminDto]),
        (status = 403, description = "Requires comments:manage.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<CommentListParams>,
) -> HttpResult<Json<Vec<CommentAdminDto>>> {
    state
        .services
        .comment_queries
        .list_for_console(
            &user,
            ListCommentsQuery {
                approved: params.approved,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/api/comments/bulk",
    request_body = BulkActionRequest,
    responses(
        (status = 200, description = "Action applied: approve or disapprove.", body = BulkResultDto),
        (status = 400, description = "Unknown action.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn moderate_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<BulkActionRequest>,
) -> HttpResult<Json<BulkResultDto>> {
    state
        .services
        .comment_commands
        .moderate(
            &user,
            ModerateCommentsCommand {
                ids: payload.ids,
                action: payload.action,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/admin/api/comments/{id}",
    params(("id" = i64, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Deleted.", body = StatusResponse),
        (status = 404, description = "No such comment.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .comment_commands
        .delete_comment(&user, id)
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}
