//! Edit deltas for the example + correction exchange.
//!
//! A delta is written as `toAdd: a, b; toRemove: c` (markers in any order,
//! either one optional). The add-list runs from `toAdd:` up to `toRemove:`
//! or the end of the message; the remove-list runs from `toRemove:` to the end.

use crate::core::string::split_list;
use serde::{Deserialize, Serialize};

const ADD_MARKER: &str = "toAdd:";
const REMOVE_MARKER: &str = "toRemove:";

/// Additions and removals extracted from one correction message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDelta {
    pub to_add: Vec<String>,
    pub to_remove: Vec<String>,
}

impl EditDelta {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Apply to a collection: append additions, then drop exact-match removals.
    pub fn apply(&self, items: &mut Vec<String>) {
        items.extend(self.to_add.iter().cloned());
        items.retain(|item| !self.to_remove.contains(item));
    }
}

/// Whether a message is written as an edit delta
pub fn is_edit_delta(text: &str) -> bool {
    text.contains(ADD_MARKER) || text.contains(REMOVE_MARKER)
}

/// Extract an [`EditDelta`]. Missing markers give empty lists.
pub fn parse_edit_delta(text: &str) -> EditDelta {
    let to_add = text
        .split_once(ADD_MARKER)
        .map(|(_, rest)| {
            let section = rest
                .split_once(REMOVE_MARKER)
                .map_or(rest, |(before, _)| before);
            split_list(trim_clause_end(section))
        })
        .unwrap_or_default();

    let to_remove = text
        .split_once(REMOVE_MARKER)
        .map(|(_, rest)| {
            let section = rest.split_once(ADD_MARKER).map_or(rest, |(before, _)| before);
            split_list(trim_clause_end(section))
        })
        .unwrap_or_default();

    EditDelta { to_add, to_remove }
}

/// Drop the `;` (and any trailing `.`) that ends a section in the instructed format
fn trim_clause_end(section: &str) -> &str {
    section.trim().trim_end_matches(['.', ';']).trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_sections() {
        let delta = parse_edit_delta("toAdd: Wheel, Helmet; toRemove: Race");
        assert_eq!(delta.to_add, vec!["Wheel", "Helmet"]);
        assert_eq!(delta.to_remove, vec!["Race"]);
    }

    #[test]
    fn test_parse_add_only() {
        let delta = parse_edit_delta("toAdd: Wheel");
        assert_eq!(delta.to_add, vec!["Wheel"]);
        assert!(delta.to_remove.is_empty());
    }

    #[test]
    fn test_parse_remove_only() {
        let delta = parse_edit_delta("toRemove: Race, Team.");
        assert!(delta.to_add.is_empty());
        assert_eq!(delta.to_remove, vec!["Race", "Team"]);
    }

    #[test]
    fn test_parse_without_markers_is_empty() {
        let delta = parse_edit_delta("Bike, Rider");
        assert!(delta.is_empty());
        assert!(!is_edit_delta("Bike, Rider"));
        assert!(is_edit_delta("toRemove: Bike"));
    }

    #[test]
    fn test_apply_adds_then_removes_exact_matches() {
        let mut items = vec!["Bike".to_string(), "Rider".to_string(), "Race".to_string()];
        let delta = parse_edit_delta("toAdd: Helmet; toRemove: Race, rider");
        delta.apply(&mut items);
        // "rider" does not match "Rider"
        assert_eq!(items, vec!["Bike", "Rider", "Helmet"]);
    }

    #[test]
    fn test_apply_removes_every_occurrence() {
        let mut items = vec!["Bike".to_string(), "Bike".to_string()];
        EditDelta {
            to_add: vec![],
            to_remove: vec!["Bike".to_string()],
        }
        .apply(&mut items);
        assert!(items.is_empty());
    }
}
