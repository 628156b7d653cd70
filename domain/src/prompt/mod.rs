//! Prompt domain
//!
//! Templates for the two requests sent to the text-generation service:
//! example suggestions and the final metamodel generation.

mod template;

pub use template::{ExampleKind, PromptTemplate};
