//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Credential store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// YAML file mapping usernames to Argon2 password hashes.
    #[serde(default = "default_credentials_path")]
    pub credentials_path: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credentials_path: default_credentials_path(),
        }
    }
}

fn default_credentials_path() -> String {
    "./users.yml".to_string()
}
