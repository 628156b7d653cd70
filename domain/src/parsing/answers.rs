//! Answer parsers: raw user text → structured step values.
//!
//! These never fail in lenient mode. Input that does not match the
//! expected shape is dropped (empty tokens, relationship lines without
//! parentheses, attribute clauses without `:`). The `_with` variants take a
//! [`ParseMode`] and turn the first dropped item into an error in strict mode.

use crate::config::{ParseMode, RelationshipSeparator};
use crate::core::error::DomainError;
use crate::core::string::split_list;
use crate::model::entities::{AttributeMap, Relationship};
use regex::Regex;
use std::sync::LazyLock;

/// `A (relationship) B` with a non-greedy label
static RELATIONSHIP_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+?)\s*\((.+?)\)\s*(.+)").expect("relationship pattern is a valid regex")
});

/// Parse the domain name: first whitespace-separated token, lower-cased.
///
/// Multi-word input is truncated to its first word
/// (`"Mountain Cycling"` → `"mountain"`).
pub fn parse_domain(text: &str) -> String {
    text.split_whitespace()
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Parse a comma-separated entity list.
///
/// Tokens are trimmed, empty tokens dropped, order kept, duplicates kept.
pub fn parse_entities(text: &str) -> Vec<String> {
    split_list(text)
}

/// Parse `Entity: attr, attr; Entity: attr` into an attribute map (lenient).
pub fn parse_attributes(text: &str) -> AttributeMap {
    scan_attributes(text).attributes
}

/// Parse attributes, rejecting clauses without `:` in strict mode.
pub fn parse_attributes_with(text: &str, mode: ParseMode) -> Result<AttributeMap, DomainError> {
    let scan = scan_attributes(text);
    match (mode, scan.skipped.into_iter().next()) {
        (ParseMode::Strict, Some(skipped)) => Err(DomainError::UnparsableClause {
            clause: skipped.index,
            content: skipped.content,
        }),
        _ => Ok(scan.attributes),
    }
}

/// Parse relationship lines of the form `Source (label) Target` (lenient).
pub fn parse_relationships(text: &str, separator: RelationshipSeparator) -> Vec<Relationship> {
    scan_relationships(text, separator).relationships
}

/// Parse relationships, rejecting non-matching lines in strict mode.
pub fn parse_relationships_with(
    text: &str,
    separator: RelationshipSeparator,
    mode: ParseMode,
) -> Result<Vec<Relationship>, DomainError> {
    let scan = scan_relationships(text, separator);
    match (mode, scan.skipped.into_iter().next()) {
        (ParseMode::Strict, Some(skipped)) => Err(DomainError::UnparsableLine {
            line: skipped.index,
            content: skipped.content,
        }),
        _ => Ok(scan.relationships),
    }
}

/// Match a single `Source (label) Target` line.
pub fn parse_relationship_line(line: &str) -> Option<Relationship> {
    let caps = RELATIONSHIP_LINE.captures(line)?;
    Some(Relationship::new(
        caps[1].trim(),
        caps[2].trim(),
        caps[3].trim(),
    ))
}

/// Input item that did not match and was left out of the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// 1-based line or clause number
    pub index: usize,
    pub content: String,
}

/// Relationships parsed from an answer plus the lines that did not match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipScan {
    pub relationships: Vec<Relationship>,
    pub skipped: Vec<Skipped>,
}

/// Attribute map parsed from an answer plus the clauses that did not match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeScan {
    pub attributes: AttributeMap,
    pub skipped: Vec<Skipped>,
}

pub fn scan_relationships(text: &str, separator: RelationshipSeparator) -> RelationshipScan {
    let mut scan = RelationshipScan::default();

    for (i, line) in text.split(separator.as_char()).enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_relationship_line(line) {
            Some(rel) => scan.relationships.push(rel),
            None => scan.skipped.push(Skipped {
                index: i + 1,
                content: line.trim().to_string(),
            }),
        }
    }

    scan
}

pub fn scan_attributes(text: &str) -> AttributeScan {
    let mut scan = AttributeScan::default();

    for (i, clause) in text.split(';').enumerate() {
        if clause.trim().is_empty() {
            continue;
        }
        let parsed = clause
            .split_once(':')
            .map(|(name, details)| (name.trim(), details))
            .filter(|(name, _)| !name.is_empty());

        match parsed {
            Some((name, details)) => scan.attributes.extend_entity(name, split_list(details)),
            None => scan.skipped.push(Skipped {
                index: i + 1,
                content: clause.trim().to_string(),
            }),
        }
    }

    scan
}
