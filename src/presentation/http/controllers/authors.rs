// src/presentation/http/controllers/authors.rs
use super::PageParams;
use crate::application::queries::authors::{GetAuthorDetailQuery, ListAuthorsQuery};
use crate::presentation::http::{
    error::{IntoPageResult, PageError, PageResult},
    extractors::IncomingFlash,
    pages,
    state::HttpState,
    templates::context_of,
};
use axum::{
    Extension,
    extract::{Path, Query},
    response::Response,
};
use tera::Context;

pub async fn author_list(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
    Query(params): Query<PageParams>,
) -> PageResult<Response> {
    let page = state
        .services
        .author_queries
        .list_authors(ListAuthorsQuery { page: params.page })
        .await
        .into_page()?;
    let mut context = Context::new();
    context.insert("page", &page);
    pages::render("author_list.html", context, flash)
}

pub async fn author_detail(
    Extension(state): Extension<HttpState>,
    Path(raw_id): Path<String>,
    flash: IncomingFlash,
    Query(params): Query<PageParams>,
) -> PageResult<Response> {
    // /authors/abc/ is a missing page, not a bad request
    let author_id = raw_id.parse::<i64>().map_err(|_| PageError::not_found())?;
    let detail = state
        .services
        .author_queries
        .get_detail(GetAuthorDetailQuery {
            author_id,
            page: params.page,
        })
        .await
        .into_page()?;
    pages::render("author_detail.html", context_of(&detail)?, flash)
}
