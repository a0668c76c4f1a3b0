//! Use cases over the lead record store.

use crate::domain::lead::{Lead, NewLead};
use crate::export::LeadSheet;
use crate::repository::{LeadReader, LeadWriter};
use crate::services::{ServiceError, ServiceResult};

/// Persists a new lead exactly as submitted.
pub fn create_lead<R>(repo: &R, new_lead: &NewLead) -> ServiceResult<Lead>
where
    R: LeadWriter + ?Sized,
{
    let created = repo.create_lead(new_lead).map_err(|err| {
        log::error!("Error saving lead: {err}");
        ServiceError::from(err)
    })?;

    created.ok_or_else(|| {
        log::error!("Error saving lead: no storage medium attached");
        ServiceError::StorageUnavailable
    })
}

/// Returns every stored lead, newest first.
pub fn list_leads<R>(repo: &R) -> ServiceResult<Vec<Lead>>
where
    R: LeadReader + ?Sized,
{
    repo.list_leads().map_err(|err| {
        log::error!("Error fetching leads: {err}");
        ServiceError::from(err)
    })
}

/// Removes every stored lead.
pub fn clear_leads<R>(repo: &R) -> ServiceResult<()>
where
    R: LeadWriter + ?Sized,
{
    repo.clear_leads().map_err(|err| {
        log::error!("Error deleting leads: {err}");
        ServiceError::from(err)
    })
}

/// Encodes a caller-held snapshot as an xlsx workbook.
pub fn export_leads(leads: &[Lead]) -> ServiceResult<Vec<u8>> {
    LeadSheet::from_leads(leads).to_xlsx().map_err(|err| {
        log::error!("Error exporting leads: {err}");
        ServiceError::from(err)
    })
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::types::LeadId;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn sample_new_lead() -> NewLead {
        NewLead::new("Acme Corp", "a@b.com", "555-0100", "AcmeBrand", "J. Doe")
    }

    fn stored(id: i32, new_lead: &NewLead) -> Lead {
        Lead {
            id: LeadId::from(id),
            client_name: new_lead.client_name.clone(),
            email: new_lead.email.clone(),
            phone_number: new_lead.phone_number.clone(),
            brand_name: new_lead.brand_name.clone(),
            agent_name: new_lead.agent_name.clone(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_passes_payload_through_unchanged() {
        let mut repo = MockRepository::new();
        repo.expect_create_lead()
            .withf(|lead| lead == &sample_new_lead())
            .times(1)
            .returning(|lead| Ok(Some(stored(1, lead))));

        let lead = create_lead(&repo, &sample_new_lead()).expect("should create lead");

        assert_eq!(lead.fields(), sample_new_lead());
        assert_eq!(lead.id.as_str(), "1");
    }

    #[test]
    fn create_does_not_validate_at_store_boundary() {
        let mut repo = MockRepository::new();
        repo.expect_create_lead()
            .times(1)
            .returning(|lead| Ok(Some(stored(2, lead))));

        let lead = create_lead(&repo, &NewLead::default()).expect("permissive create");

        assert_eq!(lead.client_name, "");
    }

    #[test]
    fn create_on_detached_store_is_unavailable() {
        let mut repo = MockRepository::new();
        repo.expect_create_lead().times(1).returning(|_| Ok(None));

        let result = create_lead(&repo, &sample_new_lead());

        assert!(matches!(result, Err(ServiceError::StorageUnavailable)));
    }

    #[test]
    fn create_surfaces_persistence_errors() {
        let mut repo = MockRepository::new();
        repo.expect_create_lead().times(1).returning(|_| {
            Err(RepositoryError::ConstraintViolation(
                "Not null constraint violation".to_string(),
            ))
        });

        let result = create_lead(&repo, &sample_new_lead());

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConstraintViolation(_)))
        ));
    }

    #[test]
    fn list_returns_repository_snapshot() {
        let mut repo = MockRepository::new();
        repo.expect_list_leads()
            .times(1)
            .returning(|| Ok(vec![stored(2, &sample_new_lead()), stored(1, &sample_new_lead())]));

        let leads = list_leads(&repo).expect("should list leads");

        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].id.as_str(), "2");
    }

    #[test]
    fn clear_propagates_connection_errors() {
        let mut repo = MockRepository::new();
        repo.expect_clear_leads()
            .times(1)
            .returning(|| Err(RepositoryError::ConnectionError("down".to_string())));

        assert!(matches!(
            clear_leads(&repo),
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }

    #[test]
    fn export_produces_workbook_bytes() {
        let bytes = export_leads(&[stored(1, &sample_new_lead())]).expect("should export");
        assert!(!bytes.is_empty());
    }
}
