//! Configuration file loading for ecore-dsl-generator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ECORE_DSL_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./ecore-dsl.toml` or `./.ecore-dsl.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/ecore-dsl-generator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MODEL, FileConfig, FileConversationConfig,
    FileLoggingConfig, FileOutputConfig, FileProviderConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
