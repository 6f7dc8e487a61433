// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::RecordArticleViewCommand,
    queries::articles::{GetArticleDetailQuery, SearchArticlesQuery},
};
use crate::presentation::http::{
    error::{IntoPageResult, PageResult},
    extractors::{ClientInfo, IncomingFlash},
    pages,
    state::HttpState,
    templates::context_of,
};
use axum::{
    Extension,
    extract::{Path, Query},
    response::Response,
};
use serde::Deserialize;

pub async fn article_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    client: ClientInfo,
    flash: IncomingFlash,
) -> PageResult<Response> {
    let mut detail = state
        .services
        .article_queries
        .get_detail(GetArticleDetailQuery { slug })
        .await
        .into_page()?;

    detail.article.view_count = state
        .services
        .article_commands
        .record_view(RecordArticleViewCommand {
            article_id: detail.article.id,
            ip_address: client.address,
            user_agent: client.user_agent,
        })
        .await
        .into_page()?;

    pages::render("article_detail.html", context_of(&detail)?, flash)
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
}

pub async fn search(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
    Query(params): Query<SearchParams>,
) -> PageResult<Response> {
    let results = state
        .services
        .article_queries
        .search(SearchArticlesQuery {
            query: params.q,
            page: params.page,
        })
        .await
        .into_page()?;
    pages::render("search_results.html", context_of(&results)?, flash)
}
