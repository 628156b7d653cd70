//! Generated metamodel artifact and its post-processing.
//!
//! The generation service answers with free text. The only cleanup applied
//! is removing a surrounding Markdown code fence; the XML is not parsed.

use crate::config::FileNaming;
use crate::core::string::truncate;
use serde::Serialize;

/// File extension of generated metamodels
pub const ECORE_EXTENSION: &str = "ecore";

/// Content type of generated metamodels
pub const XML_CONTENT_TYPE: &str = "application/xml";

/// The generated metamodel, ready to be saved (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub content: String,
    pub file_name: String,
    pub content_type: &'static str,
}

impl Artifact {
    pub fn new(content: impl Into<String>, domain: &str, naming: FileNaming) -> Self {
        Self {
            content: content.into(),
            file_name: artifact_file_name(domain, naming),
            content_type: XML_CONTENT_TYPE,
        }
    }

    /// First `max_len` bytes of the content for display
    pub fn preview(&self, max_len: usize) -> String {
        truncate(&self.content, max_len)
    }
}

/// File name for a domain: lower-cased, spaces and path separators replaced
/// by `_`, `.ecore` extension.
pub fn artifact_file_name(domain: &str, naming: FileNaming) -> String {
    let mut stem = domain
        .trim()
        .to_lowercase()
        .replace([' ', '/', '\\'], "_");
    if stem.is_empty() {
        stem.push_str("metamodel");
    }
    match naming {
        FileNaming::Plain => format!("{stem}.{ECORE_EXTENSION}"),
        FileNaming::DslSuffix => format!("{stem}_dsl.{ECORE_EXTENSION}"),
    }
}

/// Remove a surrounding triple-backtick fence (with optional language tag) and whitespace.
pub fn strip_code_fences(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        text = match rest.split_once('\n') {
            Some((tag, body)) if is_fence_tag(tag) => body,
            _ => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
    }

    let trimmed_end = text.trim_end();
    if let Some(rest) = trimmed_end.strip_suffix("```") {
        text = rest;
    }

    text.trim().to_string()
}

fn is_fence_tag(tag: &str) -> bool {
    tag.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_plain_and_suffix() {
        assert_eq!(artifact_file_name("cycling", FileNaming::Plain), "cycling.ecore");
        assert_eq!(
            artifact_file_name("cycling", FileNaming::DslSuffix),
            "cycling_dsl.ecore"
        );
    }

    #[test]
    fn test_file_name_normalizes() {
        assert_eq!(
            artifact_file_name("Mountain Cycling", FileNaming::Plain),
            "mountain_cycling.ecore"
        );
        assert_eq!(artifact_file_name("  ", FileNaming::Plain), "metamodel.ecore");
    }

    #[test]
    fn test_file_name_has_no_path_separators() {
        assert_eq!(artifact_file_name("a/b", FileNaming::Plain), "a_b.ecore");
        assert_eq!(artifact_file_name("../x", FileNaming::Plain), ".._x.ecore");
        assert_eq!(artifact_file_name("..\\x", FileNaming::DslSuffix), ".._x_dsl.ecore");
    }

    #[test]
    fn test_strip_fence_with_tag() {
        let raw = "```xml\n<?xml version=\"1.0\"?>\n<ecore:EPackage/>\n```\n";
        assert_eq!(
            strip_code_fences(raw),
            "<?xml version=\"1.0\"?>\n<ecore:EPackage/>"
        );
    }

    #[test]
    fn test_strip_fence_without_tag() {
        assert_eq!(strip_code_fences("```\n<a/>\n```"), "<a/>");
    }

    #[test]
    fn test_strip_single_line_fence() {
        assert_eq!(strip_code_fences("```ecore <a/>```"), "<a/>");
    }

    #[test]
    fn test_unfenced_text_is_only_trimmed() {
        assert_eq!(strip_code_fences("  <a/>\n"), "<a/>");
    }

    #[test]
    fn test_fence_on_first_line_is_not_content() {
        // The first line after the fence is not a tag, keep it
        assert_eq!(strip_code_fences("```<a>\n</a>```"), "<a>\n</a>");
    }

    #[test]
    fn test_artifact_new() {
        let artifact = Artifact::new("<a/>", "Cycling", FileNaming::Plain);
        assert_eq!(artifact.file_name, "cycling.ecore");
        assert_eq!(artifact.content_type, "application/xml");
        assert_eq!(artifact.preview(500), "<a/>");
    }
}
