//! [`Store`] implementation over the PostgreSQL pool.

use uuid::Uuid;

use super::{
    connection::DbConnection,
    identity::{IdentityCreate, IdentityDb},
    task::{TaskCreate, TaskDb},
};
use crate::models::{
    identity::{Identity, NewIdentity},
    task::{NewTask, Task, TaskPost},
};
use crate::store::{Store, error::Result};

impl Store for DbConnection {
    fn find_identity_by_email(&self, email: &str) -> Result<Option<Identity>> {
        IdentityDb::fetch_by_email(email, self)?
            .map(Identity::try_from)
            .transpose()
    }

    fn find_identity_by_id(&self, id: &Uuid) -> Result<Option<Identity>> {
        IdentityDb::fetch_by_id(id, self)?
            .map(Identity::try_from)
            .transpose()
    }

    fn insert_identity(&self, identity: NewIdentity) -> Result<Identity> {
        IdentityCreate::from(identity).save(self)?.try_into()
    }

    fn insert_task(&self, task: NewTask) -> Result<Task> {
        Ok(TaskCreate::from(task).save(self)?.into())
    }

    fn find_task_by_id(&self, id: &Uuid) -> Result<Option<Task>> {
        Ok(TaskDb::fetch_by_id(id, self)?.map(Task::from))
    }

    fn list_tasks(&self) -> Result<Vec<Task>> {
        Ok(TaskDb::fetch_all(self)?.into_iter().map(Task::from).collect())
    }

    fn list_tasks_by_owner(&self, owner_id: &Uuid) -> Result<Vec<Task>> {
        Ok(TaskDb::fetch_by_owner(owner_id, self)?
            .into_iter()
            .map(Task::from)
            .collect())
    }

    fn update_task(&self, id: &Uuid, fields: TaskPost) -> Result<Option<Task>> {
        Ok(TaskDb::update(id, fields, self)?.map(Task::from))
    }

    fn delete_task(&self, id: &Uuid) -> Result<bool> {
        Ok(TaskDb::delete(id, self)? > 0)
    }
}
