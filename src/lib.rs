//! Authentication and authorization core for a multi-tenant task tracker.
//!
//! Users register and log in to obtain a bearer token, then manage tasks
//! scoped to their own account. Admins can see and delete every task.
//!
//! The crate is layered the same way requests flow through it:
//!
//! - [`auth`]: password hashing and JWT issuance/verification
//! - [`service`]: account flows, the authentication gate and task operations
//! - [`policy`]: ownership and role predicates
//! - [`store`]: the persistence interface and its in-memory implementation
//! - [`db`]: the PostgreSQL implementation of the store (feature `postgres`)
//! - [`web`]: the axum surface

pub mod auth;
pub mod config;
#[cfg(feature = "postgres")]
pub mod db;
pub mod error;
pub mod models;
pub mod policy;
pub mod prelude;
#[cfg(feature = "postgres")]
mod schema;
pub mod service;
pub mod store;
pub mod web;
