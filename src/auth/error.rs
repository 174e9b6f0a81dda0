//! Credential and token errors.

/// Failures of password hashing and of token issuance or verification.
///
/// The token variants are kept distinct so they can be logged precisely;
/// the authentication gate collapses them before they reach a client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Token Expired")]
    TokenExpired,

    #[error("Malformed Token")]
    MalformedToken,

    #[error("Bad Token Signature")]
    BadSignature,

    #[error("Token expiry out of range")]
    ExpiryOutOfRange,

    #[error("Token Creation {0}")]
    TokenCreation(jsonwebtoken::errors::Error),

    #[error("Error hashing password {0}")]
    PasswordHash(argon2::password_hash::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

impl From<argon2::password_hash::Error> for Error {
    fn from(value: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

impl From<jsonwebtoken::errors::Error> for Error {
    fn from(value: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match value.kind() {
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            _ => Self::MalformedToken,
        }
    }
}
