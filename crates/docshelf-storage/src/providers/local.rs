//! Local directory document store.

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use docshelf_core::error::{AppError, ErrorKind};
use docshelf_core::result::AppResult;
use docshelf_core::traits::DocumentStore;

/// Stores each document as a file directly inside `root`.
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    /// Directory holding the documents.
    root: PathBuf,
}

impl LocalDocumentStore {
    /// Create a store rooted at `root_path`, creating the directory if needed.
    pub async fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create data directory: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Map a document name to its file path.
    ///
    /// Names that could escape the data directory never resolve.
    fn resolve(&self, name: &str) -> AppResult<PathBuf> {
        let escapes = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains('/')
            || name.contains('\\')
            || name.contains('\0');
        if escapes {
            return Err(not_found(name));
        }
        Ok(self.root.join(name))
    }
}

fn not_found(name: &str) -> AppError {
    AppError::not_found(format!("The {name} file does not exist."))
}

fn storage_error(action: &str, name: &str, err: std::io::Error) -> AppError {
    if err.kind() == IoErrorKind::NotFound {
        return not_found(name);
    }
    AppError::with_source(
        ErrorKind::Storage,
        format!("Failed to {action} document: {name}"),
        err,
    )
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn list(&self) -> AppResult<Vec<String>> {
        let mut entries = fs::read_dir(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to list directory: {}", self.root.display()),
                e,
            )
        })?;

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    async fn read(&self, name: &str) -> AppResult<Bytes> {
        let path = self.resolve(name)?;
        let data = fs::read(&path)
            .await
            .map_err(|e| storage_error("read", name, e))?;
        Ok(Bytes::from(data))
    }

    async fn write(&self, name: &str, data: Bytes) -> AppResult<()> {
        let path = self.resolve(name)?;
        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write document: {name}"),
                e,
            )
        })?;

        debug!(name, bytes = data.len(), "Wrote document");
        Ok(())
    }

    async fn create(&self, name: &str, data: Bytes) -> AppResult<()> {
        let path = self.resolve(name)?;
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| {
                if e.kind() == IoErrorKind::AlreadyExists {
                    AppError::conflict(format!("Document already exists: {name}"))
                } else {
                    AppError::with_source(
                        ErrorKind::Storage,
                        format!("Failed to create document: {name}"),
                        e,
                    )
                }
            })?;

        file.write_all(&data).await?;
        file.flush().await?;

        debug!(name, bytes = data.len(), "Created document");
        Ok(())
    }

    async fn delete(&self, name: &str) -> AppResult<()> {
        let path = self.resolve(name)?;
        fs::remove_file(&path)
            .await
            .map_err(|e| storage_error("delete", name, e))?;

        debug!(name, "Deleted document");
        Ok(())
    }

    async fn exists(&self, name: &str) -> AppResult<bool> {
        let Ok(path) = self.resolve(name) else {
            return Ok(false);
        };
        match fs::metadata(&path).await {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == IoErrorKind::NotFound => Ok(false),
            Err(e) => Err(storage_error("inspect", name, e)),
        }
    }
}
