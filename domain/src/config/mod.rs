//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod options;
pub mod validation;

pub use options::{FileNaming, ParseMode, RelationshipSeparator};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
