use thiserror::Error;

use crate::export::ExportError;
use crate::repository::errors::RepositoryError;

/// Failures produced by the lead services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("lead storage is not available")]
    StorageUnavailable,

    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
