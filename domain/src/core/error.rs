//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing answer for step: {0}")]
    MissingAnswer(&'static str),

    #[error("Domain name cannot be empty")]
    EmptyDomainName,

    #[error("Line {line} does not match the expected shape: {content}")]
    UnparsableLine { line: usize, content: String },

    #[error("Clause {clause} has no ':' separating entity and attributes: {content}")]
    UnparsableClause { clause: usize, content: String },
}

impl DomainError {
    /// Check if this error was raised by a strict-mode parser
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnparsableLine { .. } | DomainError::UnparsableClause { .. }
        )
    }
}
