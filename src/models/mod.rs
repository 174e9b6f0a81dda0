//! Domain records shared by the services, the stores and the web layer.
//!
//! These are plain structs: the diesel row types and their mapping live in
//! [`crate::db`].

pub mod identity;
pub mod task;
