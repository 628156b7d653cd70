//! Type definitions for the conversation session.

use crate::use_cases::generate_artifact::GenerateArtifactError;
use dslgen_domain::{Artifact, DomainError, RenderInstruction, Step};
use serde::Serialize;
use thiserror::Error;

/// Why a review-step message was not accepted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReviewInputError {
    #[error("Unknown category '{category}'. Valid categories: {}", .valid.join(", "))]
    UnknownCategory {
        category: String,
        valid: Vec<&'static str>,
    },

    #[error("Please name the category to change ({})", .valid.join(", "))]
    MissingCategory { valid: Vec<&'static str> },

    #[error("Type 'confirm' or 'change' followed by a category, got '{0}'")]
    Unrecognized(String),

    #[error("Cannot confirm yet, missing answers for: {}", join_steps(.0))]
    Incomplete(Vec<Step>),
}

fn join_steps(steps: &[Step]) -> String {
    steps
        .iter()
        .map(Step::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors surfaced by [`ConversationSession::submit`](super::ConversationSession::submit)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    #[error("Please enter an answer")]
    EmptyAnswer,

    #[error("Could not use that answer: {0}")]
    InvalidAnswer(#[from] DomainError),

    #[error("{0}")]
    ReviewInputInvalid(#[from] ReviewInputError),

    #[error("Generation failed: {0}")]
    GenerationFailed(#[from] GenerateArtifactError),

    #[error("The conversation is over, restart to begin a new one")]
    SessionClosed,
}

impl ConversationError {
    /// Whether the session stays usable without a reset
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            ConversationError::GenerationFailed(_) | ConversationError::SessionClosed
        )
    }
}

/// Lifecycle of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Accepting answers
    Collecting,
    /// The artifact was produced
    Completed,
    /// Generation failed; only a reset is possible
    Failed,
}

/// Outcome of one accepted message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The conversation continues with this step
    Prompt(RenderInstruction),
    /// Generation succeeded
    Completed(Artifact),
}
