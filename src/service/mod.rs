//! Request-level operations built on the store, the token service and the
//! policy.

pub mod account;
pub mod gate;
pub mod task;
