//! # docshelf-storage
//!
//! Implementations of [`docshelf_core::traits::DocumentStore`]:
//!
//! - `LocalDocumentStore`: one file per document inside a data directory
//! - `MemoryDocumentStore`: a concurrent map, used by tests and tooling

pub mod providers;

pub use providers::local::LocalDocumentStore;
pub use providers::memory::MemoryDocumentStore;
