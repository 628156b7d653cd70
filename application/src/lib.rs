//! Application layer for ecore-dsl-generator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ConversationConfig;
pub use ports::{
    artifact_sink::{ArtifactSink, ArtifactSinkError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoProgress, ProgressNotifier, RequestKind},
};
pub use use_cases::generate_artifact::{
    GenerateArtifactError, GenerateArtifactInput, GenerateArtifactUseCase,
};
pub use use_cases::run_conversation::{
    ConversationError, ConversationSession, ReviewDecision, ReviewInputError, SessionStatus,
    Turn, parse_review_input,
};
pub use use_cases::suggest_examples::SuggestExamplesUseCase;
