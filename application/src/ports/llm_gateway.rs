//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation service.
//! The application treats it as opaque: request text in, response text or
//! an error out.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Unexpected response shape: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the generation
/// service. Implementations (adapters) live in the infrastructure layer.
/// One call is one attempt; retries are not part of the contract.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send a prompt and return the generated text
    async fn complete(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Model identifier used for the requests, for logging
    fn model_name(&self) -> &str;
}
