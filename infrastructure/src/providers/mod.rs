//! Generation service adapters implementing the [`LlmGateway`](dslgen_application::LlmGateway) port.

pub mod chat_completions;

pub use chat_completions::{ChatCompletionsGateway, ChatCompletionsSettings, extract_completion_text};
