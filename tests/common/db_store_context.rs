use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use taskgate::db::{config::DbConfig, connection::DbConnection};

use super::from_env;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// PostgreSQL store on a freshly migrated schema. Dropping it reverts every
/// migration, leaving the database empty for the next test.
pub struct DbStoreContext {
    pub store: DbConnection,
}

impl DbStoreContext {
    pub fn from_env() -> Self {
        let config = DbConfig::new(from_env("DATABASE_URL"));
        let store = DbConnection::new(&config)
            .and_then(DbConnection::setup)
            .expect("Failed to prepare test database");
        Self { store }
    }
}

impl Drop for DbStoreContext {
    fn drop(&mut self) {
        let mut conn = self
            .store
            .pool
            .get()
            .expect("No connection to revert the test schema");
        conn.revert_all_migrations(MIGRATIONS)
            .expect("Failed to revert test schema");
    }
}
