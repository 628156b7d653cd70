//! Application-level configuration.
//!
//! - [`ConversationConfig`]: selects the conversation variant (steps, parsing, naming)

pub mod conversation_config;

pub use conversation_config::ConversationConfig;
