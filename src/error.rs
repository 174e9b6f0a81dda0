//! Main Crate Error

/// Errors surfaced by account, authentication and task operations.
///
/// The first group is the client-visible taxonomy. `InvalidCredentials`
/// covers both an unknown email and a wrong password, and `Unauthenticated`
/// covers every token failure, so callers cannot tell those cases apart.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("Missing Credentials")]
    MissingCredentials,

    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Forbidden")]
    Forbidden,

    #[error("Not Found")]
    NotFound,

    #[error("Context Missing")]
    CtxMissing,

    #[error("Invalid request body {0}")]
    InvalidBody(#[from] axum::extract::rejection::JsonRejection),

    #[error("Invalid path parameter {0}")]
    InvalidPath(#[from] axum::extract::rejection::PathRejection),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Auth(#[from] crate::auth::error::Error),

    #[error(transparent)]
    Config(#[from] crate::config::Error),

    #[error(transparent)]
    Store(crate::store::error::Error),
}

impl From<crate::store::error::Error> for Error {
    fn from(value: crate::store::error::Error) -> Self {
        match value {
            crate::store::error::Error::DuplicateEmail => Self::DuplicateEmail,
            other => Self::Store(other),
        }
    }
}
