//! Conversation configuration from TOML (`[conversation]` section)

use dslgen_application::ConversationConfig;
use dslgen_domain::{ConfigIssue, ConfigIssueCode, FileNaming, ParseMode, RelationshipSeparator};
use serde::{Deserialize, Serialize};

/// Raw conversation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConversationConfig {
    /// Ask for attributes after the entities
    pub collect_attributes: bool,
    /// Offer generated examples for entities and relationships
    pub suggest_examples: bool,
    /// "newline" or "comma"
    pub relationship_separator: String,
    /// Reject answers with unparsable lines instead of dropping them
    pub strict_parsing: bool,
    /// "plain" or "dsl-suffix"
    pub file_naming: String,
}

impl Default for FileConversationConfig {
    fn default() -> Self {
        let defaults = ConversationConfig::default();
        Self {
            collect_attributes: defaults.collect_attributes,
            suggest_examples: defaults.suggest_examples,
            relationship_separator: "newline".to_string(),
            strict_parsing: false,
            file_naming: "plain".to_string(),
        }
    }
}

impl FileConversationConfig {
    /// Parse `relationship_separator`, falling back to newline on unknown values
    pub fn parse_relationship_separator(&self) -> (RelationshipSeparator, Vec<ConfigIssue>) {
        match self.relationship_separator.parse::<RelationshipSeparator>() {
            Ok(separator) => (separator, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "conversation.relationship_separator".to_string(),
                        value: self.relationship_separator.clone(),
                        valid_values: vec!["newline".to_string(), "comma".to_string()],
                    },
                    format!(
                        "conversation.relationship_separator: unknown value '{}', falling back to 'newline'",
                        self.relationship_separator
                    ),
                );
                (RelationshipSeparator::default(), vec![issue])
            }
        }
    }

    /// Parse `file_naming`, falling back to plain on unknown values
    pub fn parse_file_naming(&self) -> (FileNaming, Vec<ConfigIssue>) {
        match self.file_naming.parse::<FileNaming>() {
            Ok(naming) => (naming, vec![]),
            Err(_) => {
                let issue = ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "conversation.file_naming".to_string(),
                        value: self.file_naming.clone(),
                        valid_values: vec!["plain".to_string(), "dsl-suffix".to_string()],
                    },
                    format!(
                        "conversation.file_naming: unknown value '{}', falling back to 'plain'",
                        self.file_naming
                    ),
                );
                (FileNaming::default(), vec![issue])
            }
        }
    }

    /// Convert to the application-level [`ConversationConfig`]
    pub fn to_conversation_config(&self) -> (ConversationConfig, Vec<ConfigIssue>) {
        let (separator, mut issues) = self.parse_relationship_separator();
        let (naming, naming_issues) = self.parse_file_naming();
        issues.extend(naming_issues);

        let parse_mode = if self.strict_parsing {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        };

        let config = ConversationConfig::default()
            .with_attributes(self.collect_attributes)
            .with_examples(self.suggest_examples)
            .with_relationship_separator(separator)
            .with_parse_mode(parse_mode)
            .with_file_naming(naming);
        (config, issues)
    }
}
