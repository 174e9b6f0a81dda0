//! Persistence error types.

/// Store operation errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An identity with this email already exists.
    #[error("Duplicate email")]
    DuplicateEmail,

    /// A stored role is not one of the known roles.
    #[error("Unknown role '{0}'")]
    UnknownRole(String),

    /// The in-memory store lock was poisoned by a panicking writer.
    #[error("Store lock poisoned")]
    Poisoned,

    /// Database connection pool error.
    #[cfg(feature = "postgres")]
    #[error(transparent)]
    R2D2(#[from] diesel::r2d2::PoolError),

    /// Pending migrations could not be applied.
    #[cfg(feature = "postgres")]
    #[error("Migration failed {0}")]
    Migration(String),

    /// Diesel ORM operation error.
    #[cfg(feature = "postgres")]
    #[error(transparent)]
    Diesel(diesel::result::Error),
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(feature = "postgres")]
impl From<diesel::result::Error> for Error {
    fn from(value: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};
        // users.email is the only unique index outside primary keys.
        match value {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                Self::DuplicateEmail
            }
            other => Self::Diesel(other),
        }
    }
}
