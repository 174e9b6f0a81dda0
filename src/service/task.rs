//! Task operations gated by the ownership policy.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::models::{
    identity::Identity,
    task::{NewTask, Task, TaskPost},
};
use crate::policy::{require_delete, require_modify, visible_set};
use crate::prelude::*;
use crate::store::Store;

#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn Store>,
}

impl TaskService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Creates a task owned by `identity`.
    pub fn create(&self, identity: &Identity, payload: TaskPost) -> Result<Task> {
        let task = self.store.insert_task(NewTask {
            owner_id: identity.id,
            title: payload.title,
            description: payload.description,
        })?;
        info!("Task {} created by {}", task.id, identity.id);
        Ok(task)
    }

    /// Lists the tasks `identity` is allowed to see.
    pub fn list(&self, identity: &Identity) -> Result<Vec<Task>> {
        let candidates = if identity.is_admin() {
            self.store.list_tasks()?
        } else {
            self.store.list_tasks_by_owner(&identity.id)?
        };
        Ok(visible_set(identity, candidates))
    }

    /// Replaces title and description of a task the caller may modify.
    pub fn update(&self, identity: &Identity, id: &Uuid, payload: TaskPost) -> Result<Task> {
        let task = self.store.find_task_by_id(id)?.ok_or(Error::NotFound)?;
        require_modify(identity, &task)?;
        self.store.update_task(id, payload)?.ok_or(Error::NotFound)
    }

    /// Deletes a task. Admin only; the role is checked before the lookup.
    pub fn delete(&self, identity: &Identity, id: &Uuid) -> Result<()> {
        require_delete(identity)?;
        if !self.store.delete_task(id)? {
            return Err(Error::NotFound);
        }
        info!("Task {id} deleted by {}", identity.id);
        Ok(())
    }
}
