// src/presentation/http/controllers/categories.rs
use super::PageParams;
use crate::application::queries::categories::GetCategoryDetailQuery;
use crate::presentation::http::{
    error::{IntoPageResult, PageResult},
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

pub async fn category_list(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
) -> PageResult<Response> {
    let categories = state
        .services
        .category_queries
        .list_active()
        .await
        .into_page()?;
    let mut context = Context::new();
    context.insert("categories", &categories);
    pages::render("category_list.html", context, flash)
}

pub async fn category_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    flash: IncomingFlash,
    Query(params): Query<PageParams>,
) -> PageResult<Response> {
    let detail = state
        .services
        .category_queries
        .get_detail(GetCategoryDetailQuery {
            slug,
            page: params.page,
        })
        .await
        .into_page()?;
    pages::render("category_detail.html", context_of(&detail)?, flash)
}
