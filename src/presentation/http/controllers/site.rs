// src/presentation/http/controllers/site.rs
use super::PageParams;
use crate::application::queries::site::HomeQuery;
use crate::presentation::http::{
    error::{IntoPageResult, PageResult},
    extractors::IncomingFlash,
    pages,
    state::HttpState,
    templates::context_of,
};
use axum::{Extension, Form, extract::Query, response::Response};
use serde::Deserialize;
use tera::Context;

pub async fn home(
    Extension(state): Extension<HttpState>,
    flash: IncomingFlash,
    Query(params): Query<PageParams>,
) -> PageResult<Response> {
    let home = state
        .services
        .site_queries
        .home(HomeQuery { page: params.page })
        .await
        .into_page()?;
    pages::render("home.html", context_of(&home)?, flash)
}

pub async fn about(flash: IncomingFlash) -> PageResult<Response> {
    pages::render("about.html", Context::new(), flash)
}

pub async fn contact(flash: IncomingFlash) -> PageResult<Response> {
    let mut context = Context::new();
    context.insert("success", &false);
    pages::render("contact.html", context, flash)
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Contact submissions are acknowledged but neither stored nor forwarded.
pub async fn submit_contact(
    flash: IncomingFlash,
    Form(form): Form<ContactForm>,
) -> PageResult<Response> {
    tracing::info!(message_len = form.message.len(), "contact form submitted");
    let mut context = Context::new();
    context.insert("success", &true);
    context.insert("name", form.name.trim());
    pages::render("contact.html", context, flash)
}
