//! CLI entrypoint for ecore-dsl-generator
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::{Parser, ValueEnum};
use dslgen_application::{ArtifactSink, ConversationLogger};
use dslgen_infrastructure::{
    ArtifactStore, ChatCompletionsGateway, ConfigLoader, FileConfig, JsonlConversationLogger,
};
use dslgen_presentation::{ChatRepl, Cli, ReplConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // The guard flushes the log file on drop
    let _log_guard = init_logging(&cli);

    info!("Starting ecore-dsl-generator");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    // === Validation ===
    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        eprintln!("Warning: {}", issue.message);
    }
    let errors: Vec<_> = issues.iter().filter(|i| i.is_error()).collect();
    if !errors.is_empty() {
        for issue in &errors {
            eprintln!("Error: {}", issue.message);
        }
        bail!("Invalid configuration ({} error(s))", errors.len());
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let gateway = Arc::new(ChatCompletionsGateway::from_config(&config.provider)?);
    info!("Using model {} at {}", config.provider.model, gateway.endpoint());

    let sink: Arc<dyn ArtifactSink> = Arc::new(ArtifactStore::new(config.output.directory_path()));

    let repl_config = ReplConfig::default()
        .with_progress(config.repl.show_progress && !cli.quiet)
        .with_history_file(config.repl.history_file.as_deref().map(PathBuf::from));

    let mut repl = ChatRepl::new(gateway, config.to_conversation_config())
        .with_config(repl_config)
        .with_artifact_sink(sink);

    if let Some(path) = &config.logging.transcript {
        match JsonlConversationLogger::new(path) {
            Some(logger) => {
                let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
                repl = repl.with_conversation_logger(logger);
            }
            None => warn!("Transcript disabled: could not open {}", path),
        }
    }

    repl.run().await?;
    Ok(())
}

/// Command-line flags win over every configuration file
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.provider.model = model.clone();
    }
    if let Some(endpoint) = &cli.endpoint {
        config.provider.endpoint = endpoint.clone();
    }
    if cli.attributes {
        config.conversation.collect_attributes = true;
    }
    if cli.no_examples {
        config.conversation.suggest_examples = false;
    }
    // Value names match the config vocabulary ("newline", "dsl-suffix", ...)
    if let Some(value) = cli.separator.and_then(|s| s.to_possible_value()) {
        config.conversation.relationship_separator = value.get_name().to_string();
    }
    if let Some(value) = cli.naming.and_then(|n| n.to_possible_value()) {
        config.conversation.file_naming = value.get_name().to_string();
    }
    if cli.strict {
        config.conversation.strict_parsing = true;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = Some(dir.display().to_string());
    }
    if let Some(path) = &cli.transcript {
        config.logging.transcript = Some(path.display().to_string());
    }
}

/// Stderr logging by default, daily files with `--log-dir`. RUST_LOG wins over `-v`.
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "ecore-dsl-generator.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}
