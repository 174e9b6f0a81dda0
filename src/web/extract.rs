//! Extractors whose rejections use the crate error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::prelude::*;

/// `axum::Json` with [`Error::InvalidBody`] as rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with [`Error::InvalidPath`] as rejection.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct AppPath<T>(pub T);
