//! Console output formatter for the guided conversation

use colored::Colorize;
use dslgen_application::ConversationError;
use dslgen_domain::{AnswerSet, Artifact, RenderInstruction, Step};
use std::path::Path;

/// Characters of the artifact shown after generation
pub const PREVIEW_LEN: usize = 500;

/// Formats conversation output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the question, instructions and extras of one step
    pub fn format_instruction(render: &RenderInstruction) -> String {
        let mut output = String::new();

        let (position, total) = render.position;
        output.push_str(&format!(
            "\n{} {}\n",
            format!("[{}/{}]", position, total).dimmed(),
            Self::step_title(render.step).cyan().bold()
        ));
        output.push_str(&format!("{}\n", render.question.bold()));

        if let Some(answers) = &render.answers {
            output.push('\n');
            output.push_str(&Self::format_answers(answers));
            output.push('\n');
        }

        output.push_str(&format!("{}\n", render.instructions));

        if let Some(examples) = &render.examples {
            output.push_str(&format!("{}\n", examples.dimmed()));
        }

        if !render.suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for item in &render.suggestions {
                output.push_str(&format!("  * {}\n", item));
            }
        }

        output
    }

    /// Format every answer recorded so far
    pub fn format_answers(answers: &AnswerSet) -> String {
        if answers.is_empty() {
            return format!("{}\n", "No answers yet.".dimmed());
        }

        let mut output = String::new();

        if let Some(domain) = answers.domain() {
            output.push_str(&format!("{} {}\n", "Domain:".cyan().bold(), domain));
        }

        if let Some(entities) = answers.entities() {
            output.push_str(&format!(
                "{} {}\n",
                "Entities:".cyan().bold(),
                Self::or_none(&entities.join(", "))
            ));
        }

        if let Some(attributes) = answers.attributes() {
            output.push_str(&format!("{}\n", "Attributes:".cyan().bold()));
            if attributes.is_empty() {
                output.push_str(&format!("  {}\n", "(none)".dimmed()));
            }
            for (entity, names) in attributes {
                output.push_str(&format!("  {}: {}\n", entity, names.join(", ")));
            }
        }

        if let Some(relationships) = answers.relationships() {
            output.push_str(&format!("{}\n", "Relationships:".cyan().bold()));
            if relationships.is_empty() {
                output.push_str(&format!("  {}\n", "(none)".dimmed()));
            }
            for relationship in relationships {
                output.push_str(&format!("  - {}\n", relationship));
            }
        }

        output
    }

    /// Format the generated artifact with a short preview
    pub fn format_artifact(artifact: &Artifact) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Ecore metamodel generated"));
        output.push('\n');
        output.push_str(&format!(
            "{} {} ({})\n",
            "File:".cyan().bold(),
            artifact.file_name,
            artifact.content_type
        ));
        output.push_str(&Self::section_header("Preview"));
        output.push_str(&Self::indent(&artifact.preview(PREVIEW_LEN), "  "));
        output.push('\n');
        output.push_str(&Self::footer());

        output
    }

    pub fn format_saved(path: &Path) -> String {
        format!("{} {}", "Saved to".green().bold(), path.display())
    }

    pub fn format_error(error: &ConversationError) -> String {
        let mut output = format!("{} {}", "Error:".red().bold(), error);
        if !error.is_recoverable() {
            output.push_str(&format!(
                "\n{}",
                "Type /restart to start over or /quit to exit.".yellow()
            ));
        }
        output
    }

    fn step_title(step: Step) -> &'static str {
        match step {
            Step::Domain => "Domain",
            Step::Entities => "Entities",
            Step::Attributes => "Attributes",
            Step::Relationships => "Relationships",
            Step::Review => "Review",
            Step::Generate => "Generate",
        }
    }

    fn or_none(text: &str) -> String {
        if text.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
