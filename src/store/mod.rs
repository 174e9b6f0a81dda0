//! Persistence interface.
//!
//! The core never talks to a database directly. It goes through [`Store`],
//! which is implemented by [`memory::MemoryStore`] and, with the `postgres`
//! feature, by [`crate::db::connection::DbConnection`].
//!
//! Implementations own the transactional guarantees: in particular email
//! uniqueness must hold under concurrent inserts, and a violation must
//! surface as [`error::Error::DuplicateEmail`].

use uuid::Uuid;

use crate::models::{
    identity::{Identity, NewIdentity},
    task::{NewTask, Task, TaskPost},
};

pub mod error;
pub mod memory;

use error::Result;

pub trait Store: Send + Sync {
    fn find_identity_by_email(&self, email: &str) -> Result<Option<Identity>>;

    fn find_identity_by_id(&self, id: &Uuid) -> Result<Option<Identity>>;

    /// Fails with `DuplicateEmail` when the email is already taken.
    fn insert_identity(&self, identity: NewIdentity) -> Result<Identity>;

    fn insert_task(&self, task: NewTask) -> Result<Task>;

    fn find_task_by_id(&self, id: &Uuid) -> Result<Option<Task>>;

    fn list_tasks(&self) -> Result<Vec<Task>>;

    fn list_tasks_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Task>>;

    /// Replaces title and description. Returns `None` if the task is gone.
    fn update_task(&self, id: &Uuid, fields: TaskPost) -> Result<Option<Task>>;

    /// Returns whether a task was deleted.
    fn delete_task(&self, id: &Uuid) -> Result<bool>;
}
