use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::lead::{Lead, NewLead},
    repository::errors::RepositoryResult,
};

pub mod errors;
pub mod lead;
pub mod local;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod storage;

pub use local::LocalRepository;
pub use storage::{FileStorage, MemoryStorage, StorageMedium};

/// Diesel-backed repository sharing a SQLite connection pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait LeadReader {
    /// Snapshot of every stored lead, most recently created first.
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>>;
}

pub trait LeadWriter {
    /// Persists the lead, assigning its identifier and creation instant.
    ///
    /// Returns `None` only when the store has no storage medium to write to.
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Option<Lead>>;
    /// Removes every lead. Clearing an empty store succeeds.
    fn clear_leads(&self) -> RepositoryResult<()>;
}

/// Full create/list/clear capability of a lead store backend.
pub trait RecordStore: LeadReader + LeadWriter + Send + Sync {}

impl<T> RecordStore for T where T: LeadReader + LeadWriter + Send + Sync {}
