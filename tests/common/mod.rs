#![allow(dead_code)]

use std::sync::Arc;

use taskgate::{
    auth::jwt::TokenService,
    config::AuthConfig,
    models::identity::{IdentityApi, Role},
    store::memory::MemoryStore,
    web::AppState,
};

pub mod api_client;
#[cfg(feature = "postgres")]
pub mod db_store_context;
pub mod test_context;

pub const TEST_SECRET: &str = "test-secret";

pub fn from_env(var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| panic!("Env Variable '{}' missing", var))
}

/// Services wired to a fresh in-memory store.
pub fn memory_state() -> (Arc<MemoryStore>, AppState) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), TokenService::new(&AuthConfig::new(TEST_SECRET)));
    (store, state)
}

pub fn register_admin(state: &AppState, name: &str, email: &str, password: &str) -> IdentityApi {
    state
        .accounts
        .register_with_role(name, email, password, Role::Admin)
        .expect("Failed to register admin")
}
