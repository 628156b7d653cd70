//! Domain description model.
//!
//! - [`entities::Entity`], [`entities::Relationship`]: the collected concepts and links
//! - [`entities::DomainDescription`]: the aggregate sent to generation
//! - [`builder::build_domain_description`]: answer set → description

pub mod builder;
pub mod entities;
