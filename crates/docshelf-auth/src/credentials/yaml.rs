//! Credential store persisted as a YAML mapping of username to hash.
//!
//! The file looks like:
//!
//! ```yaml
//! admin: $argon2id$v=19$m=19456,t=2,p=1$...
//! bumblebee: $argon2id$v=19$m=19456,t=2,p=1$...
//! ```
//!
//! Each value is the PHC string from [`PasswordHasher::hash`], stored as is.
//!
//! The mapping is re-read on every call so that edits made by other
//! processes (for example `docshelf-cli user add`) are visible immediately.

use std::collections::BTreeMap;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_core::traits::CredentialStore;

use crate::password::PasswordHasher;

type Credentials = BTreeMap<String, String>;

/// File-backed credential store.
#[derive(Debug)]
pub struct YamlCredentialStore {
    /// Location of the YAML file.
    path: PathBuf,
    /// Password hasher.
    hasher: PasswordHasher,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl YamlCredentialStore {
    /// Create a store for the file at `path`. The file need not exist yet.
    pub fn new(path: impl AsRef<Path>, hasher: PasswordHasher) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            hasher,
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full mapping. A missing or empty file is an empty mapping.
    async fn load(&self) -> AppResult<Credentials> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(Credentials::new()),
            Err(e) => {
                return Err(AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read credentials: {}", self.path.display()),
                    e,
                ));
            }
        };

        if text.trim().is_empty() {
            return Ok(Credentials::new());
        }
        Ok(serde_yaml::from_str(&text)?)
    }

    /// Rewrite the whole file with `credentials`.
    async fn persist(&self, credentials: &Credentials) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let text = serde_yaml::to_string(credentials)?;
        fs::write(&self.path, text).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write credentials: {}", self.path.display()),
                e,
            )
        })
    }
}

#[async_trait]
impl CredentialStore for YamlCredentialStore {
    async fn verify(&self, username: &str, password: &str) -> AppResult<bool> {
        let credentials = self.load().await?;
        match credentials.get(username) {
            Some(hash) => self.hasher.verify(password, hash),
            None => {
                debug!(username, "Unknown username");
                Ok(false)
            }
        }
    }

    async fn exists(&self, username: &str) -> AppResult<bool> {
        Ok(self.load().await?.contains_key(username))
    }

    async fn create(&self, username: &str, password: &str) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut credentials = self.load().await?;
        if credentials.contains_key(username) {
            return Err(AppError::conflict(format!(
                "Username already exists: {username}"
            )));
        }

        let hash = self.hasher.hash(password)?;
        credentials.insert(username.to_string(), hash);
        self.persist(&credentials).await?;

        info!(username, path = %self.path.display(), "Stored new credentials");
        Ok(())
    }

    async fn usernames(&self) -> AppResult<Vec<String>> {
        Ok(self.load().await?.into_keys().collect())
    }
}
