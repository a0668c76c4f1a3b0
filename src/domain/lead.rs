use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::LeadId;

/// A captured contact record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub client_name: String,
    pub email: String,
    pub phone_number: String,
    pub brand_name: String,
    pub agent_name: String,
    pub created_at: DateTime<Utc>,
}

/// The five business fields submitted for a new lead.
///
/// The store accepts these as given. Presence is checked by
/// [`crate::forms::lead::LeadForm`] before anything reaches a store.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub client_name: String,
    pub email: String,
    pub phone_number: String,
    pub brand_name: String,
    pub agent_name: String,
}

impl NewLead {
    #[must_use]
    pub fn new(
        client_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        brand_name: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            brand_name: brand_name.into(),
            agent_name: agent_name.into(),
        }
    }

    /// Borrow the value of one business field.
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::ClientName => &self.client_name,
            LeadField::Email => &self.email,
            LeadField::PhoneNumber => &self.phone_number,
            LeadField::BrandName => &self.brand_name,
            LeadField::AgentName => &self.agent_name,
        }
    }
}

impl Lead {
    /// Borrow the value of one business field.
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::ClientName => &self.client_name,
            LeadField::Email => &self.email,
            LeadField::PhoneNumber => &self.phone_number,
            LeadField::BrandName => &self.brand_name,
            LeadField::AgentName => &self.agent_name,
        }
    }

    /// Returns the business fields of this lead, without identity or timestamp.
    pub fn fields(&self) -> NewLead {
        NewLead {
            client_name: self.client_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            brand_name: self.brand_name.clone(),
            agent_name: self.agent_name.clone(),
        }
    }
}

/// The business fields of a lead, in display order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum LeadField {
    ClientName,
    Email,
    PhoneNumber,
    BrandName,
    AgentName,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::ClientName,
        LeadField::Email,
        LeadField::PhoneNumber,
        LeadField::BrandName,
        LeadField::AgentName,
    ];

    /// JSON key used on the wire and as the HTML input name.
    pub const fn key(self) -> &'static str {
        match self {
            LeadField::ClientName => "clientName",
            LeadField::Email => "email",
            LeadField::PhoneNumber => "phoneNumber",
            LeadField::BrandName => "brandName",
            LeadField::AgentName => "agentName",
        }
    }

    /// Human readable label for form placeholders and spreadsheet headers.
    pub const fn label(self) -> &'static str {
        match self {
            LeadField::ClientName => "Client Name",
            LeadField::Email => "Email",
            LeadField::PhoneNumber => "Phone Number",
            LeadField::BrandName => "Brand Name",
            LeadField::AgentName => "Agent Name",
        }
    }

    /// HTML input type rendering this field.
    pub const fn input_type(self) -> &'static str {
        match self {
            LeadField::Email => "email",
            LeadField::PhoneNumber => "tel",
            _ => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lead_serializes_with_camel_case_keys() {
        let lead = Lead {
            id: LeadId::from(7),
            client_name: "Acme Corp".to_string(),
            email: "a@b.com".to_string(),
            phone_number: "555-0100".to_string(),
            brand_name: "AcmeBrand".to_string(),
            agent_name: "J. Doe".to_string(),
            created_at: DateTime::from_timestamp_millis(1_705_314_600_000).unwrap(),
        };

        let value = serde_json::to_value(&lead).unwrap();

        assert_eq!(value["id"], "7");
        assert_eq!(value["clientName"], "Acme Corp");
        assert_eq!(value["phoneNumber"], "555-0100");
        assert_eq!(value["createdAt"], "2024-01-15T10:30:00Z");
    }

    #[test]
    fn field_keys_match_new_lead_payload() {
        let payload = NewLead::new("c", "e", "p", "b", "a");
        let value = serde_json::to_value(&payload).unwrap();

        for field in LeadField::ALL {
            assert_eq!(value[field.key()], payload.get(field));
        }
    }
}
