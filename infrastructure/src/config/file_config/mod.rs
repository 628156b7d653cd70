//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Enum-like values are kept as strings and parsed with fallbacks, so a typo
//! becomes a warning instead of a load failure.

mod conversation;
mod logging;
mod output;
mod provider;
mod repl;

pub use conversation::FileConversationConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use provider::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL, FileProviderConfig};
pub use repl::FileReplConfig;

use dslgen_application::ConversationConfig;
use dslgen_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generation service settings
    pub provider: FileProviderConfig,
    /// Conversation variant
    pub conversation: FileConversationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Provider fields (empty values, ranges, API key)
    /// 2. Enum parse failures in the conversation section
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.provider.validate();
        issues.extend(self.conversation.to_conversation_config().1);
        issues
    }

    /// Conversation settings, with unknown enum values replaced by defaults
    pub fn to_conversation_config(&self) -> ConversationConfig {
        self.conversation.to_conversation_config().0
    }
}
