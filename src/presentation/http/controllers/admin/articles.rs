// src/presentation/http/controllers/admin/articles.rs
use super::{BulkActionRequest, StatusResponse, double_option};
use crate::application::{
    commands::articles::{
        BulkArticleCommand, CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, ArticleViewDto, BulkResultDto, Page},
    queries::articles::{ListArticleViewsQuery, ListConsoleArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub category: Option<i64>,
    pub author: Option<i64>,
    /// Case-insensitive match on title, content and excerpt.
    pub q: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ViewListParams {
    /// At most this many views, newest first (default 100).
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    pub content: String,
    /// Defaults to the caller.
    #[serde(default)]
    pub author_id: Option<i64>,
    pub category_id: i64,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_published: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub featured_image: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub is_published: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/admin/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles, newest first, 25 per page.", body = Page<ArticleDto>),
        (status = 403, description = "Requires articles:manage.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    let query = ListConsoleArticlesQuery {
        published: params.published,
        featured: params.featured,
        category_id: params.category,
        author_id: params.author,
        q: params.q,
        page: params.page,
    };
    state
        .services
        .article_queries
        .list_for_console(&user, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/admin/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article, published or not.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_for_console(&user, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid title, slug or content.", body = ErrorResponse),
        (status = 404, description = "Unknown author or category.", body = ErrorResponse),
        (status = 409, description = "Slug already in use.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        author_id: payload.author_id,
        category_id: payload.category_id,
        featured_image: payload.featured_image,
        is_featured: payload.is_featured,
        is_published: payload.is_published,
    };
    let created = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/admin/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse),
        (status = 409, description = "Slug already in use.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        slug: payload.slug,
        excerpt: payload.excerpt,
        content: payload.content,
        author_id: payload.author_id,
        category_id: payload.category_id,
        featured_image: payload.featured_image,
        is_featured: payload.is_featured,
        is_published: payload.is_published,
    };
    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/admin/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Deleted with its views and comments.", body = StatusResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(Json(StatusResponse::deleted()))
}

#[utoipa::path(
    post,
    path = "/admin/api/articles/bulk",
    request_body = BulkActionRequest,
    responses(
        (status = 200, description = "Action applied: publish, unpublish, feature or unfeature.", body = BulkResultDto),
        (status = 400, description = "Unknown action.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn bulk_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<BulkActionRequest>,
) -> HttpResult<Json<BulkResultDto>> {
    state
        .services
        .article_commands
        .apply_bulk(
            &user,
            BulkArticleCommand {
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
    path = "/admin/api/articles/{id}/views",
    params(("id" = i64, Path, description = "Article id"), ViewListParams),
    responses(
        (status = 200, description = "Recorded views, newest first.", body = [ArticleViewDto]),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_views(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Query(params): Query<ViewListParams>,
) -> HttpResult<Json<Vec<ArticleViewDto>>> {
    state
        .services
        .article_queries
        .list_views(
            &user,
            ListArticleViewsQuery {
                article_id: id,
                limit: params.limit,
            },
        )
        .await
        .into_http()
        .map(Json)
}
