#![allow(dead_code)]

use std::sync::Arc;

use lead_capture::db::{DbPool, establish_connection_pool, run_migrations};
use lead_capture::domain::lead::NewLead;
use lead_capture::repository::{LocalRepository, MemoryStorage};
use tempfile::TempDir;

/// SQLite database in a temporary directory with the schema applied.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(filename);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 temp path"))
            .expect("create connection pool");
        run_migrations(&pool).expect("apply migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

pub fn memory_repository() -> LocalRepository {
    LocalRepository::new(Arc::new(MemoryStorage::new()))
}

pub fn acme() -> NewLead {
    NewLead::new("Acme Corp", "a@b.com", "555-0100", "AcmeBrand", "J. Doe")
}

pub fn globex() -> NewLead {
    NewLead::new("Globex", "hank@globex.com", "555-0199", "GlobexOne", "H. Scorpio")
}
