//! Parsing and naming options shared by the conversation and the config file

use serde::{Deserialize, Serialize};

/// How the relationships answer is split into candidate lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipSeparator {
    /// One relationship per line (default)
    #[default]
    Newline,
    /// Relationships separated by commas
    Comma,
}

impl RelationshipSeparator {
    pub fn as_char(&self) -> char {
        match self {
            RelationshipSeparator::Newline => '\n',
            RelationshipSeparator::Comma => ',',
        }
    }
}

/// What the parsers do with input that does not match the expected shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Drop non-matching lines silently
    #[default]
    Lenient,
    /// Reject the whole answer on the first non-matching line
    Strict,
}

/// Naming scheme of the generated metamodel file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileNaming {
    /// `<domain>.ecore`
    #[default]
    Plain,
    /// `<domain>_dsl.ecore`
    DslSuffix,
}

impl std::str::FromStr for RelationshipSeparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newline" | "line" | "lines" => Ok(RelationshipSeparator::Newline),
            "comma" | "commas" => Ok(RelationshipSeparator::Comma),
            other => Err(format!("unknown relationship separator: {other}")),
        }
    }
}

impl std::str::FromStr for FileNaming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(FileNaming::Plain),
            "dsl-suffix" | "dsl_suffix" | "dsl" => Ok(FileNaming::DslSuffix),
            other => Err(format!("unknown file naming: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(RelationshipSeparator::default(), RelationshipSeparator::Newline);
        assert_eq!(ParseMode::default(), ParseMode::Lenient);
        assert_eq!(FileNaming::default(), FileNaming::Plain);
    }

    #[test]
    fn test_serialize_names() {
        assert_eq!(
            serde_json::to_string(&FileNaming::DslSuffix).unwrap(),
            "\"dsl-suffix\""
        );
        assert_eq!(
            serde_json::to_string(&RelationshipSeparator::Comma).unwrap(),
            "\"comma\""
        );
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            "Lines".parse::<RelationshipSeparator>(),
            Ok(RelationshipSeparator::Newline)
        );
        assert_eq!("dsl_suffix".parse::<FileNaming>(), Ok(FileNaming::DslSuffix));
        assert!("tabs".parse::<RelationshipSeparator>().is_err());
    }
}
