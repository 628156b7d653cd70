//! Generate Artifact use case
//!
//! Turns a finished [`DomainDescription`] into an Ecore metamodel by
//! sending one generation request to the LLM gateway and cleaning the reply.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier, RequestKind};
use dslgen_domain::{Artifact, DomainDescription, FileNaming, PromptTemplate, strip_code_fences};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during artifact generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateArtifactError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("The generation service returned no content")]
    EmptyArtifact,
}

/// Input for the GenerateArtifact use case
#[derive(Debug, Clone)]
pub struct GenerateArtifactInput {
    pub description: DomainDescription,
    pub naming: FileNaming,
}

impl GenerateArtifactInput {
    pub fn new(description: DomainDescription) -> Self {
        Self {
            description,
            naming: FileNaming::default(),
        }
    }

    pub fn with_naming(mut self, naming: FileNaming) -> Self {
        self.naming = naming;
        self
    }
}

/// Use case for generating the metamodel artifact
pub struct GenerateArtifactUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> GenerateArtifactUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: GenerateArtifactInput,
    ) -> Result<Artifact, GenerateArtifactError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: GenerateArtifactInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<Artifact, GenerateArtifactError> {
        let prompt = PromptTemplate::generation_request(&input.description);

        info!(
            "Generating metamodel for '{}' ({} entities, {} relationships) with {}",
            input.description.domain,
            input.description.entities.len(),
            input.description.relationships.len(),
            self.gateway.model_name()
        );
        debug!("Generation prompt:\n{}", prompt);

        progress.on_request_start(RequestKind::Generation);
        let result = self.gateway.complete(&prompt).await;
        progress.on_request_complete(RequestKind::Generation, result.is_ok());

        let raw = result.inspect_err(|e| warn!("Generation request failed: {}", e))?;

        let content = strip_code_fences(&raw);
        if content.is_empty() {
            warn!("Generation service returned an empty artifact");
            return Err(GenerateArtifactError::EmptyArtifact);
        }

        let artifact = Artifact::new(content, &input.description.domain, input.naming);
        info!(
            "Generated {} ({} bytes)",
            artifact.file_name,
            artifact.content.len()
        );
        Ok(artifact)
    }
}
