//! In-memory store.
//!
//! Keeps records in insertion order behind a single lock, which makes the
//! email check and the insert one atomic step.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use uuid::Uuid;

use super::{
    Store,
    error::{Error, Result},
};
use crate::models::{
    identity::{Identity, NewIdentity},
    task::{NewTask, Task, TaskPost},
};

#[derive(Default)]
struct State {
    identities: Vec<Identity>,
    tasks: Vec<Task>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>> {
        self.state.read().map_err(|_| Error::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>> {
        self.state.write().map_err(|_| Error::Poisoned)
    }
}

impl Store for MemoryStore {
    fn find_identity_by_email(&self, email: &str) -> Result<Option<Identity>> {
        Ok(self
            .read()?
            .identities
            .iter()
            .find(|identity| identity.email == email)
            .cloned())
    }

    fn find_identity_by_id(&self, id: &Uuid) -> Result<Option<Identity>> {
        Ok(self
            .read()?
            .identities
            .iter()
            .find(|identity| identity.id == *id)
            .cloned())
    }

    fn insert_identity(&self, identity: NewIdentity) -> Result<Identity> {
        let mut state = self.write()?;
        if state.identities.iter().any(|i| i.email == identity.email) {
            return Err(Error::DuplicateEmail);
        }
        let identity = Identity {
            id: Uuid::new_v4(),
            name: identity.name,
            email: identity.email,
            password_hash: identity.password_hash,
            role: identity.role,
            created_at: Utc::now(),
        };
        state.identities.push(identity.clone());
        Ok(identity)
    }

    fn insert_task(&self, task: NewTask) -> Result<Task> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            owner_id: task.owner_id,
            title: task.title,
            description: task.description,
            created_at: now,
            updated_at: now,
        };
        self.write()?.tasks.push(task.clone());
        Ok(task)
    }

    fn find_task_by_id(&self, id: &Uuid) -> Result<Option<Task>> {
        Ok(self.read()?.tasks.iter().find(|t| t.id == *id).cloned())
    }

    fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.read()?.tasks.clone())
    }

    fn list_tasks_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Task>> {
        Ok(self
            .read()?
            .tasks
            .iter()
            .filter(|t| t.owner_id == *owner_id)
            .cloned()
            .collect())
    }

    fn update_task(&self, id: &Uuid, fields: TaskPost) -> Result<Option<Task>> {
        let mut state = self.write()?;
        let Some(task) = state.tasks.iter_mut().find(|t| t.id == *id) else {
            return Ok(None);
        };
        task.title = fields.title;
        task.description = fields.description;
        task.updated_at = Utc::now();
        Ok(Some(task.clone()))
    }

    fn delete_task(&self, id: &Uuid) -> Result<bool> {
        let mut state = self.write()?;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != *id);
        Ok(state.tasks.len() != before)
    }
}
