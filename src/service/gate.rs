//! Token to identity resolution, run on every protected request.

use std::sync::Arc;

use tracing::debug;

use crate::auth::jwt::TokenService;
use crate::models::identity::Identity;
use crate::prelude::*;
use crate::store::Store;

#[derive(Clone)]
pub struct AuthGate {
    store: Arc<dyn Store>,
    tokens: Arc<TokenService>,
}

impl AuthGate {
    pub fn new(store: Arc<dyn Store>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    /// Verifies `token` and loads the identity it was issued to.
    ///
    /// Every verification failure becomes [`Error::Unauthenticated`]; the
    /// precise reason is only logged. A token whose identity no longer
    /// exists is rejected the same way.
    pub fn authenticate(&self, token: &str) -> Result<Identity> {
        let subject = self.tokens.verify(token).map_err(|err| {
            debug!("Rejected token: {err}");
            Error::Unauthenticated
        })?;
        self.store.find_identity_by_id(&subject)?.ok_or_else(|| {
            debug!("Token subject {subject} no longer exists");
            Error::Unauthenticated
        })
    }
}
