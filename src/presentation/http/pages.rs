// src/presentation/http/pages.rs
use super::{
    error::PageResult,
    extractors::IncomingFlash,
    flash::{FlashMessage, FlashSigner},
    state::HttpState,
    templates,
};
use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use tera::Context;

/// Render `template` with the pending flash message and consume it.
pub fn render(template: &str, mut context: Context, flash: IncomingFlash) -> PageResult<Response> {
    context.insert("flash", &flash.message);
    let html = templates::render(template, &context)?;
    if flash.present {
        Ok((
            AppendHeaders([(SET_COOKIE, FlashSigner::clear_cookie())]),
            Html(html),
        )
            .into_response())
    } else {
        Ok(Html(html).into_response())
    }
}

/// 303 to `location`, carrying `message` to the next page.
pub fn redirect_with_flash(state: &HttpState, location: &str, message: FlashMessage) -> Response {
    match state.flash.set_cookie(&message) {
        Some(cookie) => (
            AppendHeaders([(SET_COOKIE, cookie)]),
            Redirect::to(location),
        )
            .into_response(),
        None => Redirect::to(location).into_response(),
    }
}

/// Redirect targets must stay on this site: a single leading `/`, no scheme
/// or authority, no control characters. Anything else falls back to `/`.
pub fn local_redirect_target(next: Option<&str>) -> &str {
    match next.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with("/\\")
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/",
    }
}
