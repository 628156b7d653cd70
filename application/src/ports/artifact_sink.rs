//! Port for handing a finished artifact to the environment.

use dslgen_domain::Artifact;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not save artifact: {0}")]
pub struct ArtifactSinkError(pub String);

/// Destination for generated artifacts (file system, download, ...)
pub trait ArtifactSink: Send + Sync {
    /// Persist `artifact`, returning where it ended up
    fn save(&self, artifact: &Artifact) -> Result<PathBuf, ArtifactSinkError>;
}
