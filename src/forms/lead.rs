use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::lead::{LeadField, NewLead};
use crate::forms::FormError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// In-progress draft of a lead. Every field is required.
pub struct LeadForm {
    #[validate(length(min = 1))]
    pub client_name: String,
    #[validate(length(min = 1), email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone_number: String,
    #[validate(length(min = 1))]
    pub brand_name: String,
    #[validate(length(min = 1))]
    pub agent_name: String,
}

impl LeadForm {
    /// Overwrites a single field of the draft.
    pub fn set(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::ClientName => self.client_name = value,
            LeadField::Email => self.email = value,
            LeadField::PhoneNumber => self.phone_number = value,
            LeadField::BrandName => self.brand_name = value,
            LeadField::AgentName => self.agent_name = value,
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::ClientName => &self.client_name,
            LeadField::Email => &self.email,
            LeadField::PhoneNumber => &self.phone_number,
            LeadField::BrandName => &self.brand_name,
            LeadField::AgentName => &self.agent_name,
        }
    }

    pub fn is_empty(&self) -> bool {
        LeadField::ALL.iter().all(|&field| self.get(field).is_empty())
    }

    /// Fields that currently fail validation, in display order.
    pub fn invalid_fields(&self) -> Vec<LeadField> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };
        let errors = errors.field_errors();
        LeadField::ALL
            .into_iter()
            .filter(|field| {
                // validator reports the Rust field names.
                let name = match field {
                    LeadField::ClientName => "client_name",
                    LeadField::Email => "email",
                    LeadField::PhoneNumber => "phone_number",
                    LeadField::BrandName => "brand_name",
                    LeadField::AgentName => "agent_name",
                };
                errors.contains_key(name)
            })
            .collect()
    }
}

impl TryFrom<&LeadForm> for NewLead {
    type Error = FormError;

    fn try_from(form: &LeadForm) -> Result<Self, Self::Error> {
        form.validate()?;
        Ok(NewLead::new(
            form.client_name.clone(),
            form.email.clone(),
            form.phone_number.clone(),
            form.brand_name.clone(),
            form.agent_name.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        LeadForm {
            client_name: "Acme Corp".to_string(),
            email: "a@b.com".to_string(),
            phone_number: "555-0100".to_string(),
            brand_name: "AcmeBrand".to_string(),
            agent_name: "J. Doe".to_string(),
        }
    }

    #[test]
    fn complete_form_converts_to_new_lead() {
        let new_lead = NewLead::try_from(&filled()).unwrap();
        assert_eq!(
            new_lead,
            NewLead::new("Acme Corp", "a@b.com", "555-0100", "AcmeBrand", "J. Doe")
        );
    }

    #[test]
    fn empty_form_reports_every_field() {
        let form = LeadForm::default();
        assert!(form.is_empty());
        assert_eq!(form.invalid_fields(), LeadField::ALL.to_vec());
        assert!(NewLead::try_from(&form).is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        form.set(LeadField::Email, "not-an-email".to_string());

        assert_eq!(form.invalid_fields(), vec![LeadField::Email]);
    }

    #[test]
    fn set_and_get_address_the_same_field() {
        let mut form = LeadForm::default();
        for field in LeadField::ALL {
            form.set(field, field.key().to_string());
        }
        for field in LeadField::ALL {
            assert_eq!(form.get(field), field.key());
        }
    }

    #[test]
    fn deserializes_camel_case_payload() {
        let form: LeadForm = serde_json::from_str(
            r#"{"clientName":"Acme Corp","email":"a@b.com","phoneNumber":"555-0100","brandName":"AcmeBrand","agentName":"J. Doe"}"#,
        )
        .unwrap();
        assert_eq!(form, filled());
    }
}
