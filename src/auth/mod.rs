//! Credential hashing and bearer token handling.

pub mod auth_body;
pub mod error;
pub mod jwt;
pub mod secret_hash;

pub const CONNECTION_TOKEN_TYPE: &str = "Bearer";
pub const AUTH_HEADER: &str = "Authorization";
pub const ISS: &str = "taskgate";
