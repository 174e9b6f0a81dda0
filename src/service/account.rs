//! Registration and login.

use std::sync::{Arc, LazyLock};

use tracing::{error, info, warn};

use crate::auth::{
    auth_body::AuthBody,
    jwt::TokenService,
    secret_hash::{generate_secret_hash, is_secret_valid},
};
use crate::models::identity::{IdentityApi, NewIdentity, Role, normalize_email};
use crate::prelude::*;
use crate::store::Store;

/// Verified against on unknown emails so both login failures cost one
/// Argon2 run.
static DUMMY_HASH: LazyLock<Option<String>> = LazyLock::new(|| {
    generate_secret_hash("dummy-password")
        .inspect_err(|err| error!("Failed to build dummy hash {err}"))
        .ok()
});

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn Store>,
    tokens: Arc<TokenService>,
}

impl AccountService {
    pub fn new(store: Arc<dyn Store>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    /// Registers a regular user.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<IdentityApi> {
        self.register_with_role(name, email, password, Role::User)
    }

    /// Registers an identity with an explicit role.
    ///
    /// Fails with [`Error::DuplicateEmail`] if the email is taken, either
    /// found up front or reported by the store on insert.
    pub fn register_with_role(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<IdentityApi> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(Error::MissingCredentials);
        }
        if self.store.find_identity_by_email(&email)?.is_some() {
            return Err(Error::DuplicateEmail);
        }
        let password_hash = generate_secret_hash(password)?;
        let identity = self.store.insert_identity(NewIdentity {
            name: String::from(name),
            email,
            password_hash,
            role,
        })?;
        info!("Registered {} {}", identity.role, identity.id);
        Ok(identity.into())
    }

    /// Checks credentials and issues an access token.
    ///
    /// An unknown email and a wrong password both fail with
    /// [`Error::InvalidCredentials`].
    pub fn login(&self, email: &str, password: &str) -> Result<AuthBody> {
        let email = normalize_email(email);
        if email.is_empty() || password.is_empty() {
            return Err(Error::MissingCredentials);
        }
        let Some(identity) = self.store.find_identity_by_email(&email)? else {
            if let Some(hash) = DUMMY_HASH.as_deref() {
                is_secret_valid(password, hash)?;
            }
            warn!("Login attempt for unknown email");
            return Err(Error::InvalidCredentials);
        };
        if !is_secret_valid(password, &identity.password_hash)? {
            warn!("Wrong password for {}", identity.id);
            return Err(Error::InvalidCredentials);
        }
        Ok(self.tokens.issue(&identity.id)?)
    }
}
