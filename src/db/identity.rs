//! Identity rows of the `users` table.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::connection::DbConnection;
use crate::models::identity::{Identity, NewIdentity};
use crate::schema::users::dsl::*;
use crate::store::error::{Error, Result};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct IdentityDb {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct IdentityCreate {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl From<NewIdentity> for IdentityCreate {
    fn from(value: NewIdentity) -> Self {
        Self {
            name: value.name,
            email: value.email,
            password_hash: value.password_hash,
            role: String::from(value.role.as_str()),
        }
    }
}

impl TryFrom<IdentityDb> for Identity {
    type Error = Error;

    fn try_from(value: IdentityDb) -> Result<Self> {
        let parsed_role = value.role.parse().map_err(Error::UnknownRole)?;
        Ok(Self {
            id: value.id,
            name: value.name,
            email: value.email,
            password_hash: value.password_hash,
            role: parsed_role,
            created_at: value.created_at,
        })
    }
}

impl IdentityCreate {
    /// Inserts the identity. A taken email surfaces as `DuplicateEmail`.
    pub fn save(self, connection: &DbConnection) -> Result<IdentityDb> {
        let conn = &mut connection.pool.get()?;
        Ok(diesel::insert_into(users)
            .values(&self)
            .returning(IdentityDb::as_returning())
            .get_result(conn)?)
    }
}

impl IdentityDb {
    pub fn fetch_by_id(target: &Uuid, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(users
            .filter(id.eq(target))
            .select(IdentityDb::as_select())
            .first(conn)
            .optional()?)
    }

    pub fn fetch_by_email(target: &str, connection: &DbConnection) -> Result<Option<Self>> {
        let conn = &mut connection.pool.get()?;
        Ok(users
            .filter(email.eq(target))
            .select(IdentityDb::as_select())
            .first(conn)
            .optional()?)
    }
}
