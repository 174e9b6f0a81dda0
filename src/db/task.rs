//! Task rows of the `tasks` table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::connection::DbConnection;
use crate::models::task::{NewTask, Task, TaskPost};
use crate::schema::tasks::dsl::*;
use crate::store::error::Result;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskDb {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::tasks)]
pub struct TaskCreate {
    pub owner_id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

impl From<NewTask> for TaskCreate {
    fn from(value: NewTask) -> Self {
        Self {
            owner_id: value.owner_id,
            title: value.title,
            description: value.description,
        }
    }
}

impl From<TaskDb> for Task {
    fn from(value: TaskDb) -> Self {
        Self {
            id: value.id,
            owner_id: value.owner_id,
            title: value.title,
            description: value.description,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl TaskCreate {
    pub fn save(self, connection: &DbConnection) -> Result<TaskDb> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::insert_into(tasks)
            .values(&self)
            .returning(TaskDb::as_returning())
            .get_result(conn)?)
    }
}

impl TaskDb {
    pub fn fetch_by_id(target: &Uuid, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(TaskDb::by_id(target)
            .select(TaskDb::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn fetch_all(connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(tasks
            .order(created_at.asc())
            .select(TaskDb::as_select())
            .load(conn)?)
    }

    pub fn fetch_by_owner(target: &Uuid, connection: &DbConnection) -> Result<Vec<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(tasks
            .filter(owner_id.eq(target))
            .order(created_at.asc())
            .select(TaskDb::as_select())
            .load(conn)?)
    }

    pub fn update(
        target: &Uuid,
        fields: TaskPost,
        connection: &DbConnection,
    ) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::update(TaskDb::by_id(target))
            .set((
                title.eq(fields.title),
                description.eq(fields.description),
                updated_at.eq(Utc::now()),
            ))
            .returning(TaskDb::as_returning())
            .get_result(conn)
            .optional()?)
    }

    /// Returns the number of deleted rows.
    pub fn delete(target: &Uuid, connection: &DbConnection) -> Result<usize> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::delete(TaskDb::by_id(target)).execute(conn)?)
    }

    #[diesel::dsl::auto_type(no_type_alias)]
    pub fn by_id(target: &Uuid) -> _ {
        crate::schema::tasks::dsl::tasks.filter(id.eq(target))
    }
}
