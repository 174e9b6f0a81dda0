//! HTTP surface: routes, request context and error responses.

use std::sync::Arc;

use crate::auth::jwt::TokenService;
use crate::service::{account::AccountService, gate::AuthGate, task::TaskService};
use crate::store::Store;

pub mod api;
pub mod ctx;
pub mod error;
pub mod extract;
pub mod mw_auth;

/// Shared handler state. Cloning is cheap, every service holds `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub gate: AuthGate,
    pub tasks: TaskService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: TokenService) -> Self {
        let tokens = Arc::new(tokens);
        Self {
            accounts: AccountService::new(store.clone(), tokens.clone()),
            gate: AuthGate::new(store.clone(), tokens),
            tasks: TaskService::new(store),
        }
    }
}
