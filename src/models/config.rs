//! Configuration model loaded from external sources.

use serde::Deserialize;

/// Which [`crate::repository::RecordStore`] backend the server composes.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Database,
    Local,
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    #[serde(default)]
    pub storage: StorageBackend,
    #[serde(default = "default_local_storage_dir")]
    pub local_storage_dir: String,
}

fn default_local_storage_dir() -> String {
    "storage".to_string()
}
