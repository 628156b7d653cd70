//! File-system store for generated metamodels.

use dslgen_application::ports::artifact_sink::{ArtifactSink, ArtifactSinkError};
use dslgen_domain::Artifact;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ArtifactStoreError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes artifacts into one output directory
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    directory: PathBuf,
}

impl ArtifactStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path an artifact will be written to
    pub fn path_for(&self, artifact: &Artifact) -> PathBuf {
        self.directory.join(&artifact.file_name)
    }

    /// Write `artifact`, creating the directory if needed. Existing files are replaced.
    pub fn save(&self, artifact: &Artifact) -> Result<PathBuf, ArtifactStoreError> {
        if !self.directory.exists() {
            fs::create_dir_all(&self.directory).map_err(|source| {
                ArtifactStoreError::CreateDirectory {
                    path: self.directory.clone(),
                    source,
                }
            })?;
        }

        let path = self.path_for(artifact);
        fs::write(&path, &artifact.content).map_err(|source| {
            if source.kind() == ErrorKind::PermissionDenied {
                ArtifactStoreError::PermissionDenied(path.clone())
            } else {
                ArtifactStoreError::Write {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        info!(
            "Saved {} ({} bytes) to {}",
            artifact.file_name,
            artifact.content.len(),
            path.display()
        );
        Ok(path)
    }
}

impl ArtifactSink for ArtifactStore {
    fn save(&self, artifact: &Artifact) -> Result<PathBuf, ArtifactSinkError> {
        ArtifactStore::save(self, artifact).map_err(|e| ArtifactSinkError(e.to_string()))
    }
}
