//! Review-step commands: `confirm` or `change <category>`.

use super::types::ReviewInputError;
use dslgen_domain::{Step, StepFlow};

const CONFIRM: &str = "confirm";
const CHANGE: &str = "change";

/// A valid review-step command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Confirm,
    Change(Step),
}

/// Interpret a review-step message. Keywords and categories are case-insensitive.
///
/// Only categories of `flow` are accepted, so `change attributes` is rejected
/// when the Attributes step is disabled.
pub fn parse_review_input(message: &str, flow: &StepFlow) -> Result<ReviewDecision, ReviewInputError> {
    let message = message.trim();
    if message.eq_ignore_ascii_case(CONFIRM) {
        return Ok(ReviewDecision::Confirm);
    }

    let mut tokens = message.splitn(2, char::is_whitespace);
    let keyword = tokens.next().unwrap_or_default();
    if !keyword.eq_ignore_ascii_case(CHANGE) {
        return Err(ReviewInputError::Unrecognized(message.to_string()));
    }

    let category = tokens.next().unwrap_or_default().trim().to_lowercase();
    if category.is_empty() {
        return Err(ReviewInputError::MissingCategory {
            valid: flow.category_names(),
        });
    }

    match Step::from_category(&category) {
        Some(step) if flow.contains(step) => Ok(ReviewDecision::Change(step)),
        _ => Err(ReviewInputError::UnknownCategory {
            category,
            valid: flow.category_names(),
        }),
    }
}
