//! Progress display while the generation service works

pub mod reporter;
