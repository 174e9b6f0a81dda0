//! Error to HTTP response mapping.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::prelude::*;

impl Error {
    /// Status code and client-facing message. Internal errors share one
    /// generic message, their details only reach the logs.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            Error::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                "User with this email already exists",
            ),
            Error::MissingCredentials => (StatusCode::BAD_REQUEST, "Missing credentials"),
            Error::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Incorrect email or password"),
            Error::Unauthenticated => (StatusCode::UNAUTHORIZED, "Could not validate credentials"),
            Error::Forbidden => (StatusCode::FORBIDDEN, "Not enough permissions"),
            Error::NotFound => (StatusCode::NOT_FOUND, "Task not found"),
            Error::InvalidBody(rejection) => (rejection.status(), "Invalid request body"),
            Error::InvalidPath(rejection) => (rejection.status(), "Invalid path parameter"),
            Error::CtxMissing
            | Error::IO(_)
            | Error::Auth(_)
            | Error::Config(_)
            | Error::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!("Creating API error response for error: {:?}", self);
        } else if matches!(self, Error::InvalidBody(_) | Error::InvalidPath(_)) {
            debug!("Rejected request: {self}");
        }

        let body = Json(json!({
            "error": {
                "message": message,
                "status": status.as_u16()
            }
        }));
        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
