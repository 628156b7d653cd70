//! REPL (Read-Eval-Print Loop) driving one guided conversation at a time

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::config::ReplConfig;
use dslgen_application::{
    ArtifactSink, ConversationConfig, ConversationLogger, ConversationSession, LlmGateway,
    NoProgress, SessionStatus, Turn,
};
use dslgen_domain::{Artifact, RelationshipSeparator, Step, is_edit_delta};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// What the user typed
enum Input {
    Line(String),
    Interrupted,
    Eof,
}

#[derive(Debug, PartialEq, Eq)]
enum CommandOutcome {
    Continue,
    Quit,
}

/// File-backed history at `path`, creating its directory. `None` (logged) on failure.
fn open_history(path: &Path) -> Option<FileBackedHistory> {
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!("Could not create history directory {}: {}", parent.display(), e);
        return None;
    }
    match FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf()) {
        Ok(history) => Some(history),
        Err(e) => {
            warn!("Could not open history file {}: {}", path.display(), e);
            None
        }
    }
}

/// Interactive conversation REPL
pub struct ChatRepl<G: LlmGateway + 'static> {
    session: ConversationSession<G>,
    model_name: String,
    config: ReplConfig,
    sink: Option<Arc<dyn ArtifactSink>>,
}

impl<G: LlmGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    pub fn new(gateway: Arc<G>, conversation: ConversationConfig) -> Self {
        Self {
            model_name: gateway.model_name().to_string(),
            session: ConversationSession::new(gateway, conversation),
            config: ReplConfig::default(),
            sink: None,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Where generated artifacts are saved
    pub fn with_artifact_sink(mut self, sink: Arc<dyn ArtifactSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.session = self.session.with_conversation_logger(logger);
        self
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&mut self) -> io::Result<()> {
        let mut editor = self.create_editor();

        self.print_welcome();
        println!("{}", ConsoleFormatter::format_instruction(&self.session.start()));

        loop {
            let line = match self.read_answer(&mut editor)? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    println!("^C");
                    continue;
                }
                Input::Eof => {
                    println!("Bye!");
                    break;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('/') {
                if self.handle_command(line) == CommandOutcome::Quit {
                    break;
                }
                continue;
            }

            self.process_message(line).await;
        }

        Ok(())
    }

    fn create_editor(&self) -> Reedline {
        let editor = Reedline::create();
        match self.config.history_path().and_then(|path| open_history(&path)) {
            Some(history) => editor.with_history(Box::new(history)),
            None => editor,
        }
    }

    fn read_line(editor: &mut Reedline, prompt: &DefaultPrompt) -> io::Result<Input> {
        Ok(match editor.read_line(prompt)? {
            Signal::Success(line) => Input::Line(line),
            Signal::CtrlC => Input::Interrupted,
            Signal::CtrlD => Input::Eof,
        })
    }

    /// Read one answer. Multi-line relationship answers end with an empty line.
    fn read_answer(&self, editor: &mut Reedline) -> io::Result<Input> {
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.session.step().as_str().to_string()),
            DefaultPromptSegment::Empty,
        );

        let first = match Self::read_line(editor, &prompt)? {
            Input::Line(line) => line,
            other => return Ok(other),
        };
        if !self.wants_multiline(&first) {
            return Ok(Input::Line(first));
        }

        let continuation = DefaultPrompt::new(
            DefaultPromptSegment::Basic("...".to_string()),
            DefaultPromptSegment::Empty,
        );
        let mut lines = vec![first];
        loop {
            match Self::read_line(editor, &continuation)? {
                Input::Line(line) if line.trim().is_empty() => break,
                Input::Line(line) => lines.push(line),
                Input::Interrupted => return Ok(Input::Interrupted),
                Input::Eof => break,
            }
        }
        Ok(Input::Line(lines.join("\n")))
    }

    /// Whether `first` starts a multi-line relationships answer
    fn wants_multiline(&self, first: &str) -> bool {
        let first = first.trim();
        self.session.status() == SessionStatus::Collecting
            && self.session.step() == Step::Relationships
            && self.session.config().relationship_separator == RelationshipSeparator::Newline
            && !first.is_empty()
            && !first.starts_with('/')
            && !first.eq_ignore_ascii_case("accept")
            && !is_edit_delta(first)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Ecore DSL Generator - Guided         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model_name);
        if self.session.config().relationship_separator == RelationshipSeparator::Newline {
            println!("Relationships are entered one per line; finish with an empty line.");
        }
        println!();
        Self::print_commands();
    }

    fn print_commands() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /answers          - Show the answers so far");
        println!("  /restart          - Start a new conversation");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    /// Handle slash commands
    fn handle_command(&mut self, cmd: &str) -> CommandOutcome {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return CommandOutcome::Quit;
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_commands();
            }
            "/answers" => {
                println!();
                print!("{}", ConsoleFormatter::format_answers(self.session.answers()));
            }
            "/restart" | "/reset" => {
                let render = self.session.reset();
                println!("{}", ConsoleFormatter::format_instruction(&render));
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        CommandOutcome::Continue
    }

    async fn process_message(&mut self, line: &str) {
        if self.session.status() != SessionStatus::Collecting {
            println!("This conversation is over. Type /restart to begin a new one or /quit to exit.");
            return;
        }

        let result = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.session.submit(line, &progress).await
        } else {
            self.session.submit(line, &NoProgress).await
        };

        match result {
            Ok(Turn::Prompt(render)) => {
                println!("{}", ConsoleFormatter::format_instruction(&render));
            }
            Ok(Turn::Completed(artifact)) => {
                println!("{}", ConsoleFormatter::format_artifact(&artifact));
                self.save(&artifact);
                println!("Type /restart to describe another domain or /quit to exit.");
            }
            Err(e) => {
                eprintln!("{}", ConsoleFormatter::format_error(&e));
            }
        }
        println!();
    }

    fn save(&self, artifact: &Artifact) {
        let Some(sink) = &self.sink else {
            return;
        };
        match sink.save(artifact) {
            Ok(path) => println!("{}", ConsoleFormatter::format_saved(&path)),
            Err(e) => eprintln!("Error: {}", e),
        }
    }
}
