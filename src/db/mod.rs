//! PostgreSQL persistence built on diesel.
//!
//! Row types mirror the tables one to one and are mapped to the domain
//! records of [`crate::models`] explicitly; roles are parsed on load and
//! unknown values rejected.

pub mod config;
pub mod connection;
pub mod identity;
pub mod store;
pub mod task;
