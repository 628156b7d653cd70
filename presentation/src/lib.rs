//! Presentation layer for ecore-dsl-generator
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive conversation REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, NamingArg, SeparatorArg};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
