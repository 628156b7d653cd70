//! Free-text parsers for conversation answers.
//!
//! Pure functions: no I/O, no session state, just text pattern matching.
//!
//! | Function | Step | Input shape |
//! |----------|------|-------------|
//! | [`parse_domain`] | Domain | first word |
//! | [`parse_entities`] | Entities | `A, B, C` |
//! | [`parse_attributes`] | Attributes | `A: x, y; B: z` |
//! | [`parse_relationships`] | Relationships | `A (label) B` per line or comma |
//! | [`parse_edit_delta`] | example exchange | `toAdd: ...; toRemove: ...` |

pub mod answers;
pub mod delta;

pub use answers::{
    AttributeScan, RelationshipScan, Skipped, parse_attributes, parse_attributes_with,
    parse_domain, parse_entities, parse_relationship_line, parse_relationships,
    parse_relationships_with, scan_attributes, scan_relationships,
};
pub use delta::{EditDelta, is_edit_delta, parse_edit_delta};
