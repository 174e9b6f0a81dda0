//! JWT issuance and verification.
//!
//! Tokens are self-contained: the subject, issue time and expiry travel in
//! the signed claims, and verification needs nothing but the token and the
//! shared secret. There is no revocation list, a token stays valid until it
//! expires.
//!
//! # Examples
//!
//! ```rust
//! use taskgate::auth::jwt::TokenService;
//! use taskgate::config::AuthConfig;
//! use uuid::Uuid;
//!
//! let tokens = TokenService::new(&AuthConfig::new("MySuperSecret"));
//! let subject = Uuid::new_v4();
//!
//! let body = tokens.issue(&subject).unwrap();
//! assert_eq!(tokens.verify(&body.access_token).unwrap(), subject);
//! ```

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use super::{
    ISS,
    auth_body::AuthBody,
    error::{Error, Result},
};
use crate::config::AuthConfig;

/// Claims carried by every access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthToken {
    /// Subject (identity ID).
    pub sub: Uuid,
    /// Issuer.
    pub iss: String,
    /// Expiration time.
    pub exp: i64,
    /// Issued at time.
    pub iat: i64,
    /// JWT ID.
    pub jti: Uuid,
}

impl AuthToken {
    /// Creates claims for `subject` valid for `token_duration` from `now`.
    pub fn new(subject: &Uuid, now: DateTime<Utc>, token_duration: TimeDelta) -> Option<Self> {
        let expiration = now.checked_add_signed(token_duration)?;
        Some(Self {
            sub: *subject,
            iss: String::from(ISS),
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4(),
        })
    }
}

/// Cryptographic key pair for JWT signing and verification.
struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Keys {
    fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

/// Signs and verifies access tokens with a server-held secret.
pub struct TokenService {
    keys: Keys,
    algorithm: Algorithm,
    ttl: TimeDelta,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            keys: Keys::new(config.secret.as_bytes()),
            algorithm: config.algorithm,
            ttl: config.token_ttl(),
        }
    }

    /// Issues a token for `subject` that expires one TTL from now.
    pub fn issue(&self, subject: &Uuid) -> Result<AuthBody> {
        self.issue_at(subject, Utc::now())
    }

    /// Issues a token as if the current time were `now`.
    pub fn issue_at(&self, subject: &Uuid, now: DateTime<Utc>) -> Result<AuthBody> {
        let claims = AuthToken::new(subject, now, self.ttl).ok_or_else(|| {
            error!("Token expiry overflowed for subject {subject}");
            Error::ExpiryOutOfRange
        })?;
        let token = encode(&Header::new(self.algorithm), &claims, &self.keys.encoding)
            .map_err(|err| {
                error!("Failed to encode JWT {err}");
                Error::TokenCreation(err)
            })?;
        Ok(AuthBody::new(token))
    }

    /// Verifies `token` and returns its subject.
    ///
    /// Fails with [`Error::BadSignature`] when the token was not signed with
    /// our secret, [`Error::TokenExpired`] once its expiry has passed and
    /// [`Error::MalformedToken`] for anything that is not a well formed token
    /// of ours.
    pub fn verify(&self, token: &str) -> Result<Uuid> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies `token` as if the current time were `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Uuid> {
        let claims = decode::<AuthToken>(token, &self.keys.decoding, &self.validation())?.claims;
        if claims.exp < now.timestamp() {
            return Err(Error::TokenExpired);
        }
        Ok(claims.sub)
    }

    /// Signature, algorithm and issuer are checked by `jsonwebtoken`; expiry
    /// is checked against the caller's clock without leeway.
    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.algorithm);
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.set_issuer(&[ISS]);
        validation
    }
}
