//! Infrastructure layer for ecore-dsl-generator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod artifact;
pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use artifact::{ArtifactStore, ArtifactStoreError};
pub use config::{
    ConfigLoader, FileConfig, FileConversationConfig, FileLoggingConfig, FileOutputConfig,
    FileProviderConfig, FileReplConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{ChatCompletionsGateway, ChatCompletionsSettings};
