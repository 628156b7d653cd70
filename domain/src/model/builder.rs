//! Assembling the answer set into a [`DomainDescription`].
//!
//! Merge policy for entities and attributes:
//! - entity names are taken as given, duplicates included;
//! - an attribute clause attaches to the first entity with the exact same name;
//! - attribute clauses naming an undeclared entity add that entity at the end.

use crate::conversation::answers::AnswerSet;
use crate::core::error::DomainError;
use crate::model::entities::{DomainDescription, Entity};

/// Build the domain description from collected answers.
///
/// Requires the domain and entities entries. A missing relationships or
/// attributes entry is treated as empty. Pure and idempotent.
pub fn build_domain_description(answers: &AnswerSet) -> Result<DomainDescription, DomainError> {
    let domain = answers
        .domain()
        .ok_or(DomainError::MissingAnswer("domain"))?;
    if domain.trim().is_empty() {
        return Err(DomainError::EmptyDomainName);
    }

    let names = answers
        .entities()
        .ok_or(DomainError::MissingAnswer("entities"))?;

    let mut entities: Vec<Entity> = names.iter().map(Entity::new).collect();

    if let Some(attributes) = answers.attributes() {
        for (name, attrs) in attributes {
            match entities.iter_mut().find(|e| &e.name == name) {
                Some(entity) => entity.attributes.extend(attrs.iter().cloned()),
                None => entities.push(Entity::new(name.as_str()).with_attributes(attrs.clone())),
            }
        }
    }

    Ok(DomainDescription {
        domain: domain.to_string(),
        entities,
        relationships: answers.relationships().map(<[_]>::to_vec).unwrap_or_default(),
    })
}
