// src/presentation/http/controllers/comments.rs
use crate::application::commands::comments::SubmitCommentCommand;
use crate::domain::common::Slug;
use crate::presentation::http::{
    error::{IntoPageResult, PageResult},
    extractors::ClientInfo,
    flash::FlashMessage,
    pages,
    state::HttpState,
};
use axum::{
    Extension, Form,
    extract::Path,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

pub const COMMENT_PENDING: &str = "Your comment has been submitted and is awaiting approval.";

#[derive(Debug, Default, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub content: String,
}

pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Path(article_slug): Path<String>,
    client: ClientInfo,
    Form(form): Form<CommentForm>,
) -> PageResult<Response> {
    let slug = article_slug.clone();
    let comment = state
        .services
        .comment_commands
        .submit(SubmitCommentCommand {
            article_slug,
            name: form.name,
            email: form.email,
            content: form.content,
            ip_address: client.address,
        })
        .await
        .into_page()?;
    tracing::info!(comment_id = comment.id, article = %slug, "comment awaiting moderation");

    Ok(pages::redirect_with_flash(
        &state,
        &format!("/article/{slug}/#comments"),
        FlashMessage::success(COMMENT_PENDING),
    ))
}

/// Comments are only accepted by POST; a stray GET goes back to the article
/// when the path holds a well-formed slug, otherwise home.
pub async fn add_comment_redirect(Path(article_slug): Path<String>) -> Response {
    match Slug::new(article_slug) {
        Ok(slug) => Redirect::to(&format!("/article/{slug}/")).into_response(),
        Err(_) => Redirect::to("/").into_response(),
    }
}
