use std::future::Future;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::lead::{Lead, NewLead};
use crate::repository::RecordStore;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("lead storage is not available")]
    Unavailable,

    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[cfg(feature = "client")]
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Path from the form component to the record store.
pub trait LeadsGateway {
    fn create_lead(
        &self,
        new_lead: &NewLead,
    ) -> impl Future<Output = Result<Lead, GatewayError>> + Send;

    fn list_leads(&self) -> impl Future<Output = Result<Vec<Lead>, GatewayError>> + Send;

    fn clear_leads(&self) -> impl Future<Output = Result<(), GatewayError>> + Send;
}

/// Client-mode gateway calling a store in the same process.
pub struct StoreGateway<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> StoreGateway<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: ?Sized> Clone for StoreGateway<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> LeadsGateway for StoreGateway<S>
where
    S: RecordStore + ?Sized,
{
    async fn create_lead(&self, new_lead: &NewLead) -> Result<Lead, GatewayError> {
        self.store
            .create_lead(new_lead)?
            .ok_or(GatewayError::Unavailable)
    }

    async fn list_leads(&self) -> Result<Vec<Lead>, GatewayError> {
        Ok(self.store.list_leads()?)
    }

    async fn clear_leads(&self) -> Result<(), GatewayError> {
        Ok(self.store.clear_leads()?)
    }
}
