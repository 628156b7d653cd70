//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_artifact;
pub mod run_conversation;
pub mod suggest_examples;

#[cfg(test)]
pub(crate) mod test_support;
