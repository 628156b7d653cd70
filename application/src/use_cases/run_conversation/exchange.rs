//! The example + delta side exchange of the Entities and Relationships steps.
//!
//! Suggested examples seed a working collection. Edit deltas adjust it
//! without advancing the step; `accept` turns it into the step's answer.

use dslgen_domain::{
    Answer, DomainError, EditDelta, ExampleKind, ParseMode, RelationshipSeparator, Step,
    is_edit_delta, parse_edit_delta, parse_relationships_with,
};

const ACCEPT: &str = "accept";

/// Appended to the step instructions while an exchange is open
pub(super) const EXCHANGE_HINT: &str = "Adjust the suggestions with 'toAdd: a, b; toRemove: c', type 'accept' to use them, or write your own answer.";

/// Example kind offered on entering `step`, if any
pub(super) fn example_kind(step: Step) -> Option<ExampleKind> {
    match step {
        Step::Entities => Some(ExampleKind::Entities),
        Step::Relationships => Some(ExampleKind::Relationships),
        _ => None,
    }
}

/// How a message is treated while an exchange is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ExchangeInput {
    Delta(EditDelta),
    Accept,
    /// A regular answer for the step; closes the exchange
    Answer,
}

impl ExchangeInput {
    pub(super) fn classify(message: &str) -> Self {
        if is_edit_delta(message) {
            ExchangeInput::Delta(parse_edit_delta(message))
        } else if message.trim().eq_ignore_ascii_case(ACCEPT) {
            ExchangeInput::Accept
        } else {
            ExchangeInput::Answer
        }
    }
}

/// Working collection of one open exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ExampleExchange {
    kind: ExampleKind,
    items: Vec<String>,
}

impl ExampleExchange {
    pub(super) fn new(kind: ExampleKind, suggestions: Vec<String>) -> Self {
        Self {
            kind,
            items: suggestions,
        }
    }

    pub(super) fn items(&self) -> &[String] {
        &self.items
    }

    pub(super) fn apply(&mut self, delta: &EditDelta) {
        delta.apply(&mut self.items);
    }

    /// The working collection as the step's answer.
    ///
    /// Relationship items are parsed one by one, honoring `mode`.
    pub(super) fn to_answer(&self, mode: ParseMode) -> Result<Answer, DomainError> {
        match self.kind {
            ExampleKind::Entities => Ok(Answer::Entities(self.items.clone())),
            ExampleKind::Relationships => parse_relationships_with(
                &self.items.join("\n"),
                RelationshipSeparator::Newline,
                mode,
            )
            .map(Answer::Relationships),
        }
    }
}
