//! In-memory document store.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::traits::DocumentStore;

/// Document store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: DashMap<String, Bytes>,
}

impl MemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `(name, content)` pairs.
    pub fn with_documents<I, N, C>(documents: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<Bytes>,
    {
        let store = Self::new();
        for (name, content) in documents {
            store.documents.insert(name.into(), content.into());
        }
        store
    }
}

fn not_found(name: &str) -> AppError {
    AppError::not_found(format!("The {name} file does not exist."))
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn list(&self) -> AppResult<Vec<String>> {
        Ok(self.documents.iter().map(|e| e.key().clone()).collect())
    }

    async fn read(&self, name: &str) -> AppResult<Bytes> {
        self.documents
            .get(name)
            .map(|e| e.value().clone())
            .ok_or_else(|| not_found(name))
    }

    async fn write(&self, name: &str, data: Bytes) -> AppResult<()> {
        self.documents.insert(name.to_string(), data);
        Ok(())
    }

    async fn create(&self, name: &str, data: Bytes) -> AppResult<()> {
        match self.documents.entry(name.to_string()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Document already exists: {name}"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(data);
                Ok(())
            }
        }
    }

    async fn delete(&self, name: &str) -> AppResult<()> {
        self.documents
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| not_found(name))
    }

    async fn exists(&self, name: &str) -> AppResult<bool> {
        Ok(self.documents.contains_key(name))
    }
}
