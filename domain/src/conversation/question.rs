//! Fixed question texts and the render instruction handed to the front-end

use super::answers::AnswerSet;
use super::step::{Step, StepFlow};
use crate::config::RelationshipSeparator;
use serde::Serialize;

/// Question, instructions and static examples for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepQuestion {
    pub question: &'static str,
    pub instructions: String,
    pub examples: Option<&'static str>,
}

impl StepQuestion {
    pub fn for_step(step: Step, flow: &StepFlow, separator: RelationshipSeparator) -> Self {
        match step {
            Step::Domain => Self {
                question: "Can you describe the domain of your DSL?",
                instructions: "Please provide a single word for the domain.".to_string(),
                examples: Some("Examples: cycling, cooking"),
            },
            Step::Entities => Self {
                question: "What are the main concepts or things in your domain?",
                instructions: "Please provide the concepts separated by commas.".to_string(),
                examples: Some("Examples: Bike, Rider, Race"),
            },
            Step::Attributes => Self {
                question: "Which attributes does each concept have?",
                instructions: "Please provide them as Concept: attribute, attribute; separate concepts with ';'."
                    .to_string(),
                examples: Some("Examples: Bike: brand, weight; Rider: name, age"),
            },
            Step::Relationships => Self {
                question: "How do these concepts relate to each other?",
                instructions: match separator {
                    RelationshipSeparator::Newline => {
                        "Please provide the relationships in the format: A (relationship) B, one per line."
                    }
                    RelationshipSeparator::Comma => {
                        "Please provide the relationships in the format: A (relationship) B, separated by commas."
                    }
                }
                .to_string(),
                examples: Some(match separator {
                    RelationshipSeparator::Newline => {
                        "Examples:\n- Bike (owned by) Rider\n- Rider (participates in) Race"
                    }
                    RelationshipSeparator::Comma => {
                        "Examples: Bike (owned by) Rider, Rider (participates in) Race"
                    }
                }),
            },
            Step::Review => Self {
                question: "Here are the inputs you provided. Please review them:",
                instructions: format!(
                    "If you want to change any input, type 'change' followed by the category ({}). Otherwise, type 'confirm'.",
                    flow.category_names().join(", ")
                ),
                examples: None,
            },
            Step::Generate => Self {
                question: "Generating your Ecore metamodel...",
                instructions: "Please wait while the metamodel is generated.".to_string(),
                examples: None,
            },
        }
    }
}

/// Everything the front-end needs to present one step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInstruction {
    pub step: Step,
    /// 1-based position of the step and total steps in the flow
    pub position: (usize, usize),
    pub question: String,
    pub instructions: String,
    pub examples: Option<String>,
    /// Working collection of the example exchange, when one is open
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    /// Full answer set, only at the review step
    pub answers: Option<AnswerSet>,
}
