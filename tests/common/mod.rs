use std::path::PathBuf;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tempfile::TempDir;

use campus_admin::db::{establish_connection_pool, DbPool};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Throwaway SQLite database with the full migration set applied. The
/// backing files live in a temp directory removed on drop.
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 db path"))
            .expect("failed to build pool");

        {
            let mut conn = pool.get().expect("failed to check out connection");
            conn.run_pending_migrations(MIGRATIONS)
                .expect("failed to run migrations");
        }

        Self {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
