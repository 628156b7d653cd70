//! Saving generated artifacts to disk.

mod file_store;

pub use file_store::{ArtifactStore, ArtifactStoreError};
