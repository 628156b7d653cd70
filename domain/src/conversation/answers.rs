//! Answer set: parsed answers keyed by step

use super::step::{Step, StepFlow};
use crate::model::entities::{AttributeMap, Relationship};
use serde::{Deserialize, Serialize};

/// A parsed answer for one collecting step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Domain(String),
    Entities(Vec<String>),
    Attributes(AttributeMap),
    Relationships(Vec<Relationship>),
}

impl Answer {
    pub fn step(&self) -> Step {
        match self {
            Answer::Domain(_) => Step::Domain,
            Answer::Entities(_) => Step::Entities,
            Answer::Attributes(_) => Step::Attributes,
            Answer::Relationships(_) => Step::Relationships,
        }
    }
}

/// Accumulated answers of one conversation
///
/// An entry exists only once its step was completed. Recording an answer
/// replaces the previous entry for that step wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attributes: Option<AttributeMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    relationships: Option<Vec<Relationship>>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, answer: Answer) {
        match answer {
            Answer::Domain(v) => self.domain = Some(v),
            Answer::Entities(v) => self.entities = Some(v),
            Answer::Attributes(v) => self.attributes = Some(v),
            Answer::Relationships(v) => self.relationships = Some(v),
        }
    }

    /// Remove the entry of `step`. Non-collecting steps are ignored.
    pub fn clear(&mut self, step: Step) {
        match step {
            Step::Domain => self.domain = None,
            Step::Entities => self.entities = None,
            Step::Attributes => self.attributes = None,
            Step::Relationships => self.relationships = None,
            Step::Review | Step::Generate => {}
        }
    }

    pub fn contains(&self, step: Step) -> bool {
        match step {
            Step::Domain => self.domain.is_some(),
            Step::Entities => self.entities.is_some(),
            Step::Attributes => self.attributes.is_some(),
            Step::Relationships => self.relationships.is_some(),
            Step::Review | Step::Generate => false,
        }
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn entities(&self) -> Option<&[String]> {
        self.entities.as_deref()
    }

    pub fn attributes(&self) -> Option<&AttributeMap> {
        self.attributes.as_ref()
    }

    pub fn relationships(&self) -> Option<&[Relationship]> {
        self.relationships.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
            && self.entities.is_none()
            && self.attributes.is_none()
            && self.relationships.is_none()
    }

    /// Collecting steps of `flow` that have no entry yet, in flow order
    pub fn missing(&self, flow: &StepFlow) -> Vec<Step> {
        flow.collecting_steps()
            .into_iter()
            .filter(|step| !self.contains(*step))
            .collect()
    }

    /// Every collecting step answered, with a non-empty domain name.
    ///
    /// Entity, attribute and relationship entries may legally be empty.
    pub fn is_complete(&self, flow: &StepFlow) -> bool {
        self.missing(flow).is_empty() && self.domain.as_deref().is_some_and(|d| !d.is_empty())
    }
}
