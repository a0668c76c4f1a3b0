//! JSON layout of leads kept in a key/value storage medium.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::lead::{Lead, NewLead};
use crate::domain::types::{LeadId, TypeConstraintError};

/// One element of the stored JSON array.
///
/// Business fields default to empty strings since the array may have been
/// written by a client that skipped validation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredLead {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub agent_name: String,
    pub id: String,
    pub timestamp: DateTime<Utc>,
}

impl StoredLead {
    pub fn new(lead: &NewLead, id: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            client_name: lead.client_name.clone(),
            email: lead.email.clone(),
            phone_number: lead.phone_number.clone(),
            brand_name: lead.brand_name.clone(),
            agent_name: lead.agent_name.clone(),
            id,
            timestamp,
        }
    }
}

impl TryFrom<StoredLead> for Lead {
    type Error = TypeConstraintError;

    fn try_from(stored: StoredLead) -> Result<Self, Self::Error> {
        Ok(Self {
            id: LeadId::new(stored.id)?,
            client_name: stored.client_name,
            email: stored.email,
            phone_number: stored.phone_number,
            brand_name: stored.brand_name,
            agent_name: stored.agent_name,
            created_at: stored.timestamp,
        })
    }
}
