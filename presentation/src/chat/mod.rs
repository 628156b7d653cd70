//! Interactive chat module
//!
//! Provides a line-editor based interface to the guided conversation.

mod repl;

pub use repl::ChatRepl;
