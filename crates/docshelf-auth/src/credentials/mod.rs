//! Credential store implementations.

pub mod memory;
pub mod yaml;

pub use memory::MemoryCredentialStore;
pub use yaml::YamlCredentialStore;
