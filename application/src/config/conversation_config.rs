//! Conversation behavior parameters.
//!
//! [`ConversationConfig`] groups the switches that select the conversation
//! variant: whether attributes are collected, whether example suggestions are
//! offered, how relationship answers are split, how strictly answers are
//! parsed and how the generated file is named.

use dslgen_domain::{FileNaming, ParseMode, RelationshipSeparator, StepFlow};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationConfig {
    /// Insert the Attributes step after Entities.
    pub collect_attributes: bool,
    /// Offer generated examples on entering Entities and Relationships.
    pub suggest_examples: bool,
    /// Separator between relationships in one answer.
    pub relationship_separator: RelationshipSeparator,
    /// Drop or reject input that does not match the expected shape.
    pub parse_mode: ParseMode,
    /// Naming scheme of the generated file.
    pub file_naming: FileNaming,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            collect_attributes: false,
            suggest_examples: true,
            relationship_separator: RelationshipSeparator::Newline,
            parse_mode: ParseMode::Lenient,
            file_naming: FileNaming::Plain,
        }
    }
}

impl ConversationConfig {
    // ==================== Builder Methods ====================

    pub fn with_attributes(mut self, enabled: bool) -> Self {
        self.collect_attributes = enabled;
        self
    }

    pub fn with_examples(mut self, enabled: bool) -> Self {
        self.suggest_examples = enabled;
        self
    }

    pub fn with_relationship_separator(mut self, separator: RelationshipSeparator) -> Self {
        self.relationship_separator = separator;
        self
    }

    pub fn with_parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }

    pub fn with_file_naming(mut self, naming: FileNaming) -> Self {
        self.file_naming = naming;
        self
    }

    /// Step sequence for this variant
    pub fn flow(&self) -> StepFlow {
        StepFlow::new(self.collect_attributes)
    }
}
