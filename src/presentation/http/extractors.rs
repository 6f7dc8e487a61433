// src/presentation/http/extractors.rs
use super::{
    error::HttpError,
    flash::{FLASH_COOKIE, FlashMessage},
    state::HttpState,
};
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    domain::common::ClientAddress,
};
use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{header, request::Parts},
};
use headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};
use std::{convert::Infallible, net::SocketAddr};

fn state_of(parts: &Parts) -> Option<&HttpState> {
    parts.extensions.get::<HttpState>()
}

/// Console user behind a valid `Authorization: Bearer` token.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let services = state_of(parts)
            .map(|state| state.services.clone())
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let user = services
            .authenticate(header.token())
            .await
            .map_err(HttpError::from_error)?;
        Ok(Self(user))
    }
}

/// Who is on the other end of the request, as far as we can tell.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub address: ClientAddress,
    pub user_agent: String,
}

impl<S: Send + Sync> FromRequestParts<S> for ClientInfo {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded_for = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok());
        let remote = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        let user_agent = parts
            .headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        Ok(Self {
            address: ClientAddress::resolve(forwarded_for, remote),
            user_agent,
        })
    }
}

/// Flash message left by the previous request, if its cookie verifies.
#[derive(Debug, Clone, Default)]
pub struct IncomingFlash {
    pub message: Option<FlashMessage>,
    /// A flash cookie was sent, valid or not, and should be cleared.
    pub present: bool,
}

impl<S: Send + Sync> FromRequestParts<S> for IncomingFlash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(raw) = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(FLASH_COOKIE).map(str::to_owned))
        else {
            return Ok(Self::default());
        };

        let message = state_of(parts).and_then(|state| state.flash.decode(&raw));
        if message.is_none() && !raw.is_empty() {
            tracing::debug!("discarding unverifiable flash cookie");
        }
        Ok(Self {
            message,
            present: true,
        })
    }
}
