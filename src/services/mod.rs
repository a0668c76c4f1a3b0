pub mod errors;
pub mod leads;

pub use errors::{ServiceError, ServiceResult};
