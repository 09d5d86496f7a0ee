//! Document storage configuration.

use serde::{Deserialize, Serialize};

/// Where documents and static assets live on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the documents, one file per document.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Directory served for static assets (`/javascripts/...`).
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            public_dir: default_public_dir(),
        }
    }
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_public_dir() -> String {
    "./public".to_string()
}
