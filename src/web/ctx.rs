//! Request context resolved from the bearer token.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use tower_cookies::{Cookie, Cookies};
use tracing::{debug, error};

use crate::auth::{AUTH_HEADER, CONNECTION_TOKEN_TYPE, auth_body::AuthBody};
use crate::models::identity::Identity;
use crate::prelude::*;

use super::AppState;

/// The name of the cookie used to store authentication tokens.
pub const AUTH_TOKEN_COOKIE: &str = "auth-token";

/// Request context holding the authenticated identity.
#[derive(Clone, Debug)]
pub struct Ctx {
    pub identity: Identity,
}

impl Ctx {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

/// Why a request has no context. Stored in the request extensions, so it
/// has to be `Clone`, unlike [`Error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CtxError {
    TokenMissing,
    Unauthenticated,
    Unavailable,
}

impl From<CtxError> for Error {
    fn from(value: CtxError) -> Self {
        match value {
            CtxError::TokenMissing | CtxError::Unauthenticated => Error::Unauthenticated,
            CtxError::Unavailable => Error::CtxMissing,
        }
    }
}

/// Where the request token came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenSource {
    Header,
    Cookie,
}

/// Extracts the token from `Authorization: Bearer <token>`, falling back
/// to the auth cookie.
fn request_token(headers: &HeaderMap, cookies: &Cookies) -> Option<(String, TokenSource)> {
    headers
        .get(AUTH_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case(CONNECTION_TOKEN_TYPE))
        .map(|(_, token)| (token.trim().to_string(), TokenSource::Header))
        .or_else(|| {
            cookies
                .get(AUTH_TOKEN_COOKIE)
                .map(|c| (c.value().to_string(), TokenSource::Cookie))
        })
}

fn token_cookie(value: String) -> Cookie<'static> {
    Cookie::build((AUTH_TOKEN_COOKIE, value))
        .path("/")
        .http_only(true)
        .build()
}

/// Middleware resolving the request context.
///
/// Runs the authentication gate on the request token and stores the
/// outcome in the request extensions for [`Ctx`] extraction. The token
/// cookie is cleared only when it carried the rejected token.
pub async fn mw_ctx_resolver(
    State(state): State<AppState>,
    cookies: Cookies,
    headers: HeaderMap,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = request_token(&headers, &cookies);
    let source = token.as_ref().map(|(_, source)| *source);
    let ctx = match token {
        None => Err(CtxError::TokenMissing),
        Some((token, _)) => match state.gate.authenticate(&token) {
            Ok(identity) => Ok(Ctx::new(identity)),
            Err(Error::Unauthenticated) => Err(CtxError::Unauthenticated),
            Err(err) => {
                error!("Failed to resolve request context {err}");
                Err(CtxError::Unavailable)
            }
        },
    };

    if let Err(reason) = &ctx {
        debug!("No request context: {reason:?} (token from {source:?})");
        if *reason == CtxError::Unauthenticated && source == Some(TokenSource::Cookie) {
            cookies.remove(token_cookie(String::new()));
        }
    }
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

/// Stores a freshly issued token in the auth cookie.
pub fn set_token_cookie(cookies: &Cookies, token: &AuthBody) {
    cookies.add(token_cookie(token.access_token.clone()));
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        Ok(parts
            .extensions
            .get::<std::result::Result<Ctx, CtxError>>()
            .ok_or(Error::CtxMissing)?
            .clone()?)
    }
}
