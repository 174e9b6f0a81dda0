//! Ownership and role rules.
//!
//! Every predicate here is pure and works on already loaded data. Callers
//! fetch the resource, ask the policy, and treat a refusal as final.
//!
//! Updates are open to the owner and to admins, deletes only to admins.
//!
//! ```rust
//! use chrono::Utc;
//! use taskgate::models::identity::{Identity, Role};
//! use taskgate::models::task::Task;
//! use taskgate::policy::{can_delete, can_modify};
//! use uuid::Uuid;
//!
//! let alice = Identity {
//!     id: Uuid::new_v4(),
//!     name: String::from("Alice"),
//!     email: String::from("a@x.com"),
//!     password_hash: String::new(),
//!     role: Role::User,
//!     created_at: Utc::now(),
//! };
//! let task = Task {
//!     id: Uuid::new_v4(),
//!     owner_id: alice.id,
//!     title: String::from("Write docs"),
//!     description: None,
//!     created_at: Utc::now(),
//!     updated_at: Utc::now(),
//! };
//!
//! assert!(can_modify(&alice, &task));
//! assert!(!can_delete(&alice));
//! ```

use uuid::Uuid;

use crate::models::{identity::Identity, task::Task};
use crate::prelude::*;

/// A resource bound to the identity that created it.
pub trait Owned {
    fn owner_id(&self) -> Uuid;
}

impl Owned for Task {
    fn owner_id(&self) -> Uuid {
        self.owner_id
    }
}

/// Admins may modify anything, everyone else only what they own.
pub fn can_modify<R: Owned + ?Sized>(identity: &Identity, resource: &R) -> bool {
    identity.is_admin() || resource.owner_id() == identity.id
}

/// Only admins may delete, ownership does not matter.
pub fn can_delete(identity: &Identity) -> bool {
    identity.is_admin()
}

/// Admins see every resource, everyone else only their own.
pub fn visible_set<R: Owned>(identity: &Identity, resources: Vec<R>) -> Vec<R> {
    if identity.is_admin() {
        return resources;
    }
    resources
        .into_iter()
        .filter(|resource| resource.owner_id() == identity.id)
        .collect()
}

pub fn require_modify<R: Owned + ?Sized>(identity: &Identity, resource: &R) -> Result<()> {
    if can_modify(identity, resource) {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}

pub fn require_delete(identity: &Identity) -> Result<()> {
    if can_delete(identity) {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}
