//! Conversation steps and the fixed transition table

use serde::{Deserialize, Serialize};

/// One stage of the guided conversation
///
/// Order is fixed: Domain → Entities → (Attributes) → Relationships → Review → Generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Domain,
    Entities,
    Attributes,
    Relationships,
    Review,
    Generate,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Domain => "domain",
            Step::Entities => "entities",
            Step::Attributes => "attributes",
            Step::Relationships => "relationships",
            Step::Review => "review",
            Step::Generate => "generate",
        }
    }

    /// Resolve a review category name (`change <category>`) to its step.
    ///
    /// Only answer-collecting steps are categories.
    pub fn from_category(name: &str) -> Option<Step> {
        match name {
            "domain" => Some(Step::Domain),
            "entities" => Some(Step::Entities),
            "attributes" => Some(Step::Attributes),
            "relationships" => Some(Step::Relationships),
            _ => None,
        }
    }

    /// Whether this step stores an answer in the answer set
    pub fn is_collecting(&self) -> bool {
        matches!(
            self,
            Step::Domain | Step::Entities | Step::Attributes | Step::Relationships
        )
    }

    /// Whether entering this step can open the example + delta exchange
    pub fn offers_examples(&self) -> bool {
        matches!(self, Step::Entities | Step::Relationships)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The step sequence of one conversation variant
///
/// The Attributes step only exists when `collect_attributes` is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepFlow {
    collect_attributes: bool,
}

impl StepFlow {
    pub fn new(collect_attributes: bool) -> Self {
        Self { collect_attributes }
    }

    pub fn collects_attributes(&self) -> bool {
        self.collect_attributes
    }

    /// Step following `step`, or `None` once Generate is reached
    pub fn next(&self, step: Step) -> Option<Step> {
        match step {
            Step::Domain => Some(Step::Entities),
            Step::Entities if self.collect_attributes => Some(Step::Attributes),
            Step::Entities | Step::Attributes => Some(Step::Relationships),
            Step::Relationships => Some(Step::Review),
            Step::Review => Some(Step::Generate),
            Step::Generate => None,
        }
    }

    /// All steps of this flow in order
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = Vec::with_capacity(6);
        let mut current = Some(Step::Domain);
        while let Some(step) = current {
            steps.push(step);
            current = self.next(step);
        }
        steps
    }

    /// Answer-collecting steps of this flow in order
    pub fn collecting_steps(&self) -> Vec<Step> {
        self.steps().into_iter().filter(Step::is_collecting).collect()
    }

    pub fn contains(&self, step: Step) -> bool {
        step != Step::Attributes || self.collect_attributes
    }

    /// 1-based position of `step` within the flow, for progress display
    pub fn position(&self, step: Step) -> Option<usize> {
        self.steps().iter().position(|s| *s == step).map(|i| i + 1)
    }

    /// Category names accepted by `change <category>` in this flow
    pub fn category_names(&self) -> Vec<&'static str> {
        self.collecting_steps().iter().map(Step::as_str).collect()
    }
}
