//! In-memory credential store.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::CredentialStore;

use crate::password::PasswordHasher;

/// Credential store that keeps hashes in a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    hashes: DashMap<String, String>,
    hasher: PasswordHasher,
}

impl MemoryCredentialStore {
    /// Create an empty store.
    pub fn new(hasher: PasswordHasher) -> Self {
        Self {
            hashes: DashMap::new(),
            hasher,
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn verify(&self, username: &str, password: &str) -> AppResult<bool> {
        let Some(hash) = self.hashes.get(username).map(|e| e.value().clone()) else {
            return Ok(false);
        };
        self.hasher.verify(password, &hash)
    }

    async fn exists(&self, username: &str) -> AppResult<bool> {
        Ok(self.hashes.contains_key(username))
    }

    async fn create(&self, username: &str, password: &str) -> AppResult<()> {
        match self.hashes.entry(username.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Username already exists: {username}"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(self.hasher.hash(password)?);
                Ok(())
            }
        }
    }

    async fn usernames(&self) -> AppResult<Vec<String>> {
        let mut names: Vec<String> = self.hashes.iter().map(|e| e.key().clone()).collect();
        names.sort();
        Ok(names)
    }
}
