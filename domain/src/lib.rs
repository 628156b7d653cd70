//! Domain layer for ecore-dsl-generator
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Guided conversation
//!
//! A fixed sequence of [`Step`]s collects a domain name, its concepts
//! (entities, optionally with attributes) and the relationships between them.
//! Each answer is parsed into an [`Answer`] and stored in the [`AnswerSet`].
//!
//! ## Domain description
//!
//! Once every step is answered, [`build_domain_description`] assembles a
//! [`DomainDescription`], which [`PromptTemplate::generation_request`] turns
//! into the request for an Ecore metamodel [`Artifact`].

pub mod artifact;
pub mod config;
pub mod conversation;
pub mod core;
pub mod model;
pub mod parsing;
pub mod prompt;

// Re-export commonly used types
pub use artifact::{Artifact, artifact_file_name, strip_code_fences};
pub use config::{ConfigIssue, ConfigIssueCode, FileNaming, ParseMode, RelationshipSeparator, Severity};
pub use conversation::{
    answers::{Answer, AnswerSet},
    question::{RenderInstruction, StepQuestion},
    step::{Step, StepFlow},
};
pub use core::error::DomainError;
pub use model::{
    builder::build_domain_description,
    entities::{AttributeMap, DomainDescription, Entity, Relationship},
};
pub use parsing::{
    EditDelta, is_edit_delta, parse_attributes, parse_attributes_with, parse_domain,
    parse_edit_delta, parse_entities, parse_relationship_line, parse_relationships,
    parse_relationships_with,
};
pub use prompt::{ExampleKind, PromptTemplate};
