//! Prompt templates for example suggestions and metamodel generation

use crate::model::entities::DomainDescription;

/// What kind of examples to request for a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleKind {
    Entities,
    Relationships,
}

impl ExampleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExampleKind::Entities => "entities",
            ExampleKind::Relationships => "relationships",
        }
    }
}

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Request a comma-separated list of examples for the declared domain
    pub fn examples_request(kind: ExampleKind, domain: &str) -> String {
        let mut prompt = format!(
            r#"Provide examples of {} for the domain "{}". Return the examples in a comma-separated list without any additional text."#,
            kind.as_str(),
            domain
        );
        if kind == ExampleKind::Relationships {
            prompt.push_str(" Write each relationship as: A (relationship) B.");
        }
        prompt
    }

    /// Request a complete Ecore metamodel for the finished description
    pub fn generation_request(description: &DomainDescription) -> String {
        let mut prompt = format!(
            r#"Generate an Ecore metamodel file for a Domain Specific Language with the following specifications:
Domain: {}
Main Concepts/Entities: {}
"#,
            description.domain,
            description.entity_names().join(", ")
        );

        if description.has_attributes() {
            prompt.push_str("Attributes:\n");
            for entity in description.entities.iter().filter(|e| !e.attributes.is_empty()) {
                prompt.push_str(&format!(
                    "- {}: {}\n",
                    entity.name,
                    entity.attributes.join(", ")
                ));
            }
        }

        prompt.push_str("Relationships:\n");
        for rel in &description.relationships {
            prompt.push_str(&format!("- {}\n", rel));
        }

        prompt.push_str(
            "\nPlease provide only the complete Ecore XMI content with no additional explanations.",
        );

        prompt
    }
}
