// src/presentation/http/controllers/newsletter.rs
use crate::application::commands::newsletter::SubscribeCommand;
use crate::domain::newsletter::SubscriptionOutcome;
use crate::presentation::http::{
    error::{IntoPageResult, PageResult},
    flash::FlashMessage,
    pages,
    state::HttpState,
};
use axum::{
    Extension, Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub next: Option<String>,
}

pub async fn subscribe(
    Extension(state): Extension<HttpState>,
    Form(form): Form<SubscribeForm>,
) -> PageResult<Response> {
    let target = pages::local_redirect_target(form.next.as_deref()).to_owned();
    let result = state
        .services
        .newsletter_commands
        .subscribe(SubscribeCommand {
            email: form.email,
            first_name: form.first_name,
            last_name: form.last_name,
        })
        .await
        .into_page()?;

    let message = match result.outcome {
        SubscriptionOutcome::AlreadyActive => FlashMessage::info(result.message()),
        SubscriptionOutcome::Created | SubscriptionOutcome::Reactivated => {
            FlashMessage::success(result.message())
        }
    };
    Ok(pages::redirect_with_flash(&state, &target, message))
}

pub async fn subscribe_redirect() -> Response {
    Redirect::to("/").into_response()
}
