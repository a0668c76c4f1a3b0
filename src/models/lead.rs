use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::lead::{Lead as DomainLead, NewLead as DomainNewLead};
use crate::domain::types::LeadId;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::leads)]
/// Diesel model for [`crate::domain::lead::Lead`].
pub struct Lead {
    pub id: i32,
    pub client_name: String,
    pub email: String,
    pub phone_number: String,
    pub brand_name: String,
    pub agent_name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::leads)]
/// Insertable form of [`Lead`].
pub struct NewLead<'a> {
    pub client_name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub brand_name: &'a str,
    pub agent_name: &'a str,
    pub created_at: NaiveDateTime,
}

impl From<Lead> for DomainLead {
    fn from(lead: Lead) -> Self {
        Self {
            id: LeadId::from(lead.id),
            client_name: lead.client_name,
            email: lead.email,
            phone_number: lead.phone_number,
            brand_name: lead.brand_name,
            agent_name: lead.agent_name,
            created_at: lead.created_at.and_utc(),
        }
    }
}

impl<'a> NewLead<'a> {
    /// Borrows the domain payload, stamping it with the creation instant.
    pub fn stamped(lead: &'a DomainNewLead, created_at: NaiveDateTime) -> Self {
        Self {
            client_name: lead.client_name.as_str(),
            email: lead.email.as_str(),
            phone_number: lead.phone_number.as_str(),
            brand_name: lead.brand_name.as_str(),
            agent_name: lead.agent_name.as_str(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn stamped_borrows_domain_fields() {
        let domain = DomainNewLead::new("Acme", "a@b.com", "555", "Brand", "Agent");
        let now = Utc::now().naive_utc();
        let new: NewLead = NewLead::stamped(&domain, now);
        assert_eq!(new.client_name, "Acme");
        assert_eq!(new.email, "a@b.com");
        assert_eq!(new.phone_number, "555");
        assert_eq!(new.brand_name, "Brand");
        assert_eq!(new.agent_name, "Agent");
        assert_eq!(new.created_at, now);
    }

    #[test]
    fn lead_into_domain() {
        let now = Utc::now().naive_utc();
        let db_lead = Lead {
            id: 3,
            client_name: "c".to_string(),
            email: "e".to_string(),
            phone_number: "p".to_string(),
            brand_name: "b".to_string(),
            agent_name: "a".to_string(),
            created_at: now,
        };
        let domain: DomainLead = db_lead.into();
        assert_eq!(domain.id.as_str(), "3");
        assert_eq!(domain.client_name, "c");
        assert_eq!(domain.agent_name, "a");
        assert_eq!(domain.created_at.naive_utc(), now);
    }
}
