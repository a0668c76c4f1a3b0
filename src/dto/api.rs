//! Bodies exchanged with the `/api/leads` endpoints.

use serde::{Deserialize, Serialize};

/// Plain `{"message": ...}` body used for confirmations and failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub const SAVE_ERROR: &str = "Error saving lead";
pub const FETCH_ERROR: &str = "Error fetching leads";
pub const DELETE_ERROR: &str = "Error deleting leads";
pub const EXPORT_ERROR: &str = "Error exporting leads";
pub const DELETED: &str = "All leads deleted";
