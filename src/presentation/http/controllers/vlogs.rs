// src/presentation/http/controllers/vlogs.rs
use super::PageParams;
use crate::application::queries::vlogs::{GetVlogDetailQuery, ListVlogsQuery};
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

pub async fn vlog_list(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
    Query(params): Query<PageParams>,
) -> PageResult<Response> {
    let page = state
        .services
        .vlog_queries
        .list_published(ListVlogsQuery { page: params.page })
        .await
        .into_page()?;
    let mut context = Context::new();
    context.insert("page", &page);
    pages::render("vlog_list.html", context, flash)
}

pub async fn vlog_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    flash: IncomingFlash,
) -> PageResult<Response> {
    let mut detail = state
        .services
        .vlog_queries
        .get_detail(GetVlogDetailQuery { slug })
        .await
        .into_page()?;
    detail.vlog.view_count = state
        .services
        .vlog_commands
        .record_view(detail.vlog.id)
        .await
        .into_page()?;
    pages::render("vlog_detail.html", context_of(&detail)?, flash)
}
