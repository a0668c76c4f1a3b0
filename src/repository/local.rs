//! Lead store kept as a single JSON array inside a key/value storage medium.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::{
    domain::lead::{Lead, NewLead},
    models::local::StoredLead,
    repository::{
        LeadReader, LeadWriter,
        errors::{RepositoryError, RepositoryResult},
        storage::StorageMedium,
    },
};

/// Key of the entry holding the JSON-encoded lead array.
pub const STORAGE_KEY: &str = "leads_data";
/// Prefix of identifiers issued by [`LocalRepository`].
pub const LEAD_ID_PREFIX: &str = "lead_";

/// Local-storage implementation of [`crate::repository::RecordStore`].
///
/// The store may be built before its medium exists. While detached every
/// operation is a no-op: listing yields nothing, creating yields `None` and
/// clearing succeeds.
pub struct LocalRepository {
    medium: Option<Arc<dyn StorageMedium>>,
    key: String,
    // Last issued millisecond; also serializes read-modify-write cycles.
    last_issued: Mutex<i64>,
}

impl LocalRepository {
    pub fn new(medium: Arc<dyn StorageMedium>) -> Self {
        Self {
            medium: Some(medium),
            key: STORAGE_KEY.to_string(),
            last_issued: Mutex::new(0),
        }
    }

    /// A store with no medium attached.
    pub fn detached() -> Self {
        Self {
            medium: None,
            key: STORAGE_KEY.to_string(),
            last_issued: Mutex::new(0),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn is_attached(&self) -> bool {
        self.medium.is_some()
    }

    /// Writes an empty array when the entry does not exist yet.
    pub fn initialize(&self) -> RepositoryResult<()> {
        let Some(medium) = &self.medium else {
            return Ok(());
        };
        if medium.get_item(&self.key)?.is_none() {
            medium.set_item(&self.key, "[]")?;
        }
        Ok(())
    }

    fn read_all(&self, medium: &dyn StorageMedium) -> RepositoryResult<Vec<StoredLead>> {
        match medium.get_item(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_all(&self, medium: &dyn StorageMedium, leads: &[StoredLead]) -> RepositoryResult<()> {
        let raw = serde_json::to_string(leads)?;
        medium.set_item(&self.key, &raw)
    }
}

/// Picks a millisecond stamp that no earlier lead of this store carries.
fn next_id_millis(now_ms: i64, last_issued: i64, existing: &[StoredLead]) -> i64 {
    let newest_stored = existing
        .iter()
        .filter_map(|lead| lead.id.strip_prefix(LEAD_ID_PREFIX))
        .filter_map(|millis| millis.parse::<i64>().ok())
        // A stamp chrono cannot represent was not issued by this store.
        .filter(|&millis| DateTime::from_timestamp_millis(millis.saturating_add(1)).is_some())
        .max()
        .unwrap_or(i64::MIN);

    now_ms.max(last_issued.saturating_add(1)).max(newest_stored.saturating_add(1))
}

impl LeadReader for LocalRepository {
    fn list_leads(&self) -> RepositoryResult<Vec<Lead>> {
        let Some(medium) = &self.medium else {
            return Ok(Vec::new());
        };

        // Stored in creation order.
        self.read_all(medium.as_ref())?
            .into_iter()
            .rev()
            .map(|stored| Lead::try_from(stored).map_err(RepositoryError::from))
            .collect()
    }
}

impl LeadWriter for LocalRepository {
    fn create_lead(&self, new_lead: &NewLead) -> RepositoryResult<Option<Lead>> {
        let Some(medium) = &self.medium else {
            return Ok(None);
        };

        let mut last_issued = self
            .last_issued
            .lock()
            .map_err(|e| RepositoryError::Unexpected(format!("Store lock poisoned: {e}")))?;

        let mut leads = self.read_all(medium.as_ref())?;

        let now = Utc::now();
        let millis = next_id_millis(now.timestamp_millis(), *last_issued, &leads);
        let timestamp = DateTime::from_timestamp_millis(millis).unwrap_or(now);

        let stored = StoredLead::new(new_lead, format!("{LEAD_ID_PREFIX}{millis}"), timestamp);
        leads.push(stored.clone());
        self.write_all(medium.as_ref(), &leads)?;
        *last_issued = millis;

        Ok(Some(Lead::try_from(stored)?))
    }

    fn clear_leads(&self) -> RepositoryResult<()> {
        let Some(medium) = &self.medium else {
            return Ok(());
        };

        let _guard = self
            .last_issued
            .lock()
            .map_err(|e| RepositoryError::Unexpected(format!("Store lock poisoned: {e}")))?;

        self.write_all(medium.as_ref(), &[])
    }
}
