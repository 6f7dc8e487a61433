// src/presentation/http/error.rs
use super::templates::{self, TemplateError};
use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Serialize;
use tera::Context;
use utoipa::ToSchema;

fn status_for(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::Conflict(_) => StatusCode::CONFLICT,
        ApplicationError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ApplicationError::Forbidden(_) => StatusCode::FORBIDDEN,
        ApplicationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ApplicationError::Domain(domain) => match domain {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        },
    }
}

fn public_message(status: StatusCode, err: &ApplicationError) -> String {
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
        "internal server error".to_owned()
    } else {
        match err {
            ApplicationError::Domain(domain) => domain.to_string(),
            ApplicationError::Validation(msg)
            | ApplicationError::NotFound(msg)
            | ApplicationError::Conflict(msg)
            | ApplicationError::Unauthorized(msg)
            | ApplicationError::Forbidden(msg)
            | ApplicationError::Infrastructure(msg) => msg.clone(),
        }
    }
}

/// JSON error returned by the management API.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = status_for(&err);
        Self {
            status,
            message: public_message(status, &err),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

/// HTML error page for the public site.
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    message: String,
}

impl PageError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = status_for(&err);
        Self {
            status,
            message: public_message(status, &err),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "page not found".to_owned(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<TemplateError> for PageError {
    fn from(err: TemplateError) -> Self {
        tracing::error!(error = %err, "template rendering failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal server error".to_owned(),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let template = if self.status == StatusCode::NOT_FOUND {
            "not_found.html"
        } else {
            "error.html"
        };
        let mut context = Context::new();
        context.insert("status", &self.status.as_u16());
        context.insert("message", &self.message);
        context.insert("flash", &Option::<()>::None);

        match templates::render(template, &context) {
            Ok(html) => (self.status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "error page failed to render");
                (self.status, self.message).into_response()
            }
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;

pub trait IntoPageResult<T> {
    fn into_page(self) -> PageResult<T>;
}

impl<T> IntoPageResult<T> for ApplicationResult<T> {
    fn into_page(self) -> PageResult<T> {
        self.map_err(PageError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_kind() {
        let err = ApplicationError::from(DomainError::Conflict("slug taken".into()));
        assert_eq!(HttpError::from_error(err).status(), StatusCode::CONFLICT);

        let err = ApplicationError::from(DomainError::NotFound("gone".into()));
        assert_eq!(PageError::from_error(err).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn server_errors_hide_details() {
        let err = ApplicationError::infrastructure("connection refused at 10.0.0.5");
        let http = HttpError::from_error(err);
        assert_eq!(http.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(http.message, "internal server error");
    }
}
