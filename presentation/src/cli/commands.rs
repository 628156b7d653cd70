//! CLI command definitions

use clap::{Parser, ValueEnum};
use dslgen_domain::{FileNaming, RelationshipSeparator};
use std::path::PathBuf;

/// How relationships are separated in one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeparatorArg {
    /// One relationship per line, finished by an empty line
    Newline,
    /// Relationships separated by commas on one line
    Comma,
}

impl From<SeparatorArg> for RelationshipSeparator {
    fn from(arg: SeparatorArg) -> Self {
        match arg {
            SeparatorArg::Newline => RelationshipSeparator::Newline,
            SeparatorArg::Comma => RelationshipSeparator::Comma,
        }
    }
}

/// Naming scheme of the saved file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NamingArg {
    /// `<domain>.ecore`
    Plain,
    /// `<domain>_dsl.ecore`
    DslSuffix,
}

impl From<NamingArg> for FileNaming {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::Plain => FileNaming::Plain,
            NamingArg::DslSuffix => FileNaming::DslSuffix,
        }
    }
}

/// CLI arguments for ecore-dsl-generator
#[derive(Parser, Debug)]
#[command(name = "ecore-dsl-generator")]
#[command(author, version, about = "Describe a domain in a short conversation and get an Ecore metamodel")]
#[command(long_about = r#"
ecore-dsl-generator asks a few questions about your domain (its name, main
concepts and how they relate), lets you review the answers and then asks a
language model to write an Ecore metamodel (.ecore, XMI) for it.

The conversation:
1. Domain:        a single word, e.g. cycling
2. Entities:      comma-separated concepts, e.g. Bike, Rider, Race
   (Attributes:   with --attributes, e.g. Bike: brand, weight; Rider: name)
3. Relationships: one per line, e.g. Bike (owned by) Rider
4. Review:        'confirm' or 'change <category>'

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./ecore-dsl.toml         Project-level config
3. ~/.config/ecore-dsl-generator/config.toml   Global config

The API key is read from MISTRAL_API_KEY unless configured otherwise.

Example:
  ecore-dsl-generator
  ecore-dsl-generator --attributes --output-dir models
  ecore-dsl-generator --separator comma --naming dsl-suffix
"#)]
pub struct Cli {
    /// Model to use for suggestions and generation
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Chat-completions endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Also ask for the attributes of each entity
    #[arg(short, long)]
    pub attributes: bool,

    /// Do not fetch example suggestions
    #[arg(long)]
    pub no_examples: bool,

    /// Relationship separator
    #[arg(long, value_enum, value_name = "SEP")]
    pub separator: Option<SeparatorArg>,

    /// File naming scheme
    #[arg(long, value_enum, value_name = "SCHEME")]
    pub naming: Option<NamingArg>,

    /// Reject answers containing lines that cannot be parsed
    #[arg(long)]
    pub strict: bool,

    /// Directory to save the generated metamodel in
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Write a JSONL transcript of the conversation
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Write diagnostic logs to daily files in this directory instead of stderr
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ecore-dsl-generator"]).unwrap();
        assert!(cli.model.is_none());
        assert!(!cli.attributes);
        assert!(!cli.no_examples);
        assert!(!cli.strict);
        assert_eq!(cli.verbose, 0);
        assert!(cli.separator.is_none());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "ecore-dsl-generator",
            "-m",
            "mistral-large-latest",
            "--attributes",
            "--no-examples",
            "--separator",
            "comma",
            "--naming",
            "dsl-suffix",
            "-o",
            "models",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.model.as_deref(), Some("mistral-large-latest"));
        assert!(cli.attributes);
        assert!(cli.no_examples);
        assert_eq!(
            cli.separator.map(RelationshipSeparator::from),
            Some(RelationshipSeparator::Comma)
        );
        assert_eq!(cli.naming.map(FileNaming::from), Some(FileNaming::DslSuffix));
        assert_eq!(cli.output_dir, Some(PathBuf::from("models")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_unknown_separator() {
        assert!(Cli::try_parse_from(["ecore-dsl-generator", "--separator", "tabs"]).is_err());
    }
}
