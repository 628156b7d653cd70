//! Run Conversation use case
//!
//! [`ConversationSession`] owns the state of one guided conversation: the
//! current [`Step`], the [`AnswerSet`], the open example exchange and the
//! generation outcome. One session serves one user; front-ends construct a
//! new session per conversation.
//!
//! | Step          | Accepts                                   | Next                         |
//! |---------------|-------------------------------------------|------------------------------|
//! | Domain        | free text, first word kept                | Entities                     |
//! | Entities      | comma list, delta, `accept`               | Attributes / Relationships   |
//! | Attributes    | `Concept: a, b; Other: c`                 | Relationships                |
//! | Relationships | `A (label) B` items, delta, `accept`      | Review                       |
//! | Review        | `confirm`, `change <category>`            | Generate / that category     |
//! | Generate      | nothing; generation runs once on entry    | terminal                     |
//!
//! After a `change`, the re-answered step continues in fixed order, so the
//! steps after it are asked again before Review.

mod exchange;
mod review;
mod types;

pub use review::{ReviewDecision, parse_review_input};
pub use types::{ConversationError, ReviewInputError, SessionStatus, Turn};

use crate::config::ConversationConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::generate_artifact::{GenerateArtifactInput, GenerateArtifactUseCase};
use crate::use_cases::suggest_examples::SuggestExamplesUseCase;
use dslgen_domain::{
    Answer, AnswerSet, Artifact, DomainDescription, RenderInstruction, Step, StepFlow,
    StepQuestion, build_domain_description, parse_attributes_with, parse_domain,
    parse_entities, parse_relationships_with,
};
use exchange::{EXCHANGE_HINT, ExampleExchange, ExchangeInput, example_kind};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// State machine of one guided conversation
pub struct ConversationSession<G: LlmGateway + 'static> {
    config: ConversationConfig,
    flow: StepFlow,
    generator: GenerateArtifactUseCase<G>,
    suggester: SuggestExamplesUseCase<G>,
    logger: Arc<dyn ConversationLogger>,
    step: Step,
    answers: AnswerSet,
    exchange: Option<ExampleExchange>,
    status: SessionStatus,
    description: Option<DomainDescription>,
    artifact: Option<Artifact>,
    last_error: Option<ConversationError>,
    generation_attempts: usize,
}

impl<G: LlmGateway + 'static> ConversationSession<G> {
    pub fn new(gateway: Arc<G>, config: ConversationConfig) -> Self {
        Self {
            flow: config.flow(),
            config,
            generator: GenerateArtifactUseCase::new(Arc::clone(&gateway)),
            suggester: SuggestExamplesUseCase::new(gateway),
            logger: Arc::new(NoConversationLogger),
            step: Step::Domain,
            answers: AnswerSet::new(),
            exchange: None,
            status: SessionStatus::Collecting,
            description: None,
            artifact: None,
            last_error: None,
            generation_attempts: 0,
        }
    }

    /// Set the conversation transcript logger
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    // ==================== Accessors ====================

    pub fn config(&self) -> &ConversationConfig {
        &self.config
    }

    pub fn flow(&self) -> &StepFlow {
        &self.flow
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Description built for the last generation attempt
    pub fn description(&self) -> Option<&DomainDescription> {
        self.description.as_ref()
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    /// The generation failure that closed the session, if any
    pub fn last_error(&self) -> Option<&ConversationError> {
        self.last_error.as_ref()
    }

    pub fn generation_attempts(&self) -> usize {
        self.generation_attempts
    }

    /// Whether an example exchange is open on the current step
    pub fn has_open_exchange(&self) -> bool {
        self.exchange.is_some()
    }

    // ==================== Operations ====================

    /// Begin the conversation at the Domain step
    pub fn start(&self) -> RenderInstruction {
        self.logger.log(ConversationEvent::new(
            "session_started",
            json!({
                "config": self.config,
                "steps": self.flow.steps(),
            }),
        ));
        self.log_step_entered();
        self.render()
    }

    /// Process one user message for the current step.
    ///
    /// Errors other than [`ConversationError::GenerationFailed`] leave the
    /// session where it was, so the caller can simply re-prompt.
    pub async fn submit(
        &mut self,
        message: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<Turn, ConversationError> {
        if self.status != SessionStatus::Collecting {
            return Err(ConversationError::SessionClosed);
        }

        let message = message.trim();
        if message.is_empty() {
            return Err(ConversationError::EmptyAnswer);
        }

        self.logger.log(ConversationEvent::new(
            "user_message",
            json!({ "step": self.step, "message": message }),
        ));

        match self.step {
            Step::Domain | Step::Entities | Step::Attributes | Step::Relationships => {
                self.handle_answer(message, progress).await
            }
            Step::Review => self.handle_review(message, progress).await,
            Step::Generate => Err(ConversationError::SessionClosed),
        }
    }

    /// Discard everything and return to the Domain step
    pub fn reset(&mut self) -> RenderInstruction {
        info!("Resetting conversation");
        self.step = Step::Domain;
        self.answers = AnswerSet::new();
        self.exchange = None;
        self.status = SessionStatus::Collecting;
        self.description = None;
        self.artifact = None;
        self.last_error = None;

        self.logger
            .log(ConversationEvent::new("session_reset", json!({})));
        self.log_step_entered();
        self.render()
    }

    /// What the front-end shows for the current step
    pub fn render(&self) -> RenderInstruction {
        let question =
            StepQuestion::for_step(self.step, &self.flow, self.config.relationship_separator);

        let mut instructions = question.instructions;
        let suggestions = match &self.exchange {
            Some(exchange) => {
                instructions.push(' ');
                instructions.push_str(EXCHANGE_HINT);
                exchange.items().to_vec()
            }
            None => Vec::new(),
        };

        RenderInstruction {
            step: self.step,
            position: (
                self.flow.position(self.step).unwrap_or_default(),
                self.flow.steps().len(),
            ),
            question: question.question.to_string(),
            instructions,
            examples: question.examples.map(str::to_string),
            suggestions,
            answers: (self.step == Step::Review).then(|| self.answers.clone()),
        }
    }

    // ==================== Step handling ====================

    async fn handle_answer(
        &mut self,
        message: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<Turn, ConversationError> {
        let answer = match self.exchange.as_ref().map(|_| ExchangeInput::classify(message)) {
            Some(ExchangeInput::Delta(delta)) => {
                if let Some(exchange) = self.exchange.as_mut() {
                    exchange.apply(&delta);
                    debug!("Working collection now has {} items", exchange.items().len());
                }
                self.logger.log(ConversationEvent::new(
                    "delta_applied",
                    json!({
                        "step": self.step,
                        "to_add": delta.to_add,
                        "to_remove": delta.to_remove,
                    }),
                ));
                return Ok(Turn::Prompt(self.render()));
            }
            Some(ExchangeInput::Accept) => match &self.exchange {
                Some(exchange) => exchange.to_answer(self.config.parse_mode)?,
                None => self.parse_answer(message)?,
            },
            Some(ExchangeInput::Answer) | None => self.parse_answer(message)?,
        };

        self.record_and_advance(answer, progress).await
    }

    fn parse_answer(&self, message: &str) -> Result<Answer, ConversationError> {
        let mode = self.config.parse_mode;
        let answer = match self.step {
            Step::Domain => Answer::Domain(parse_domain(message)),
            Step::Entities => Answer::Entities(parse_entities(message)),
            Step::Attributes => Answer::Attributes(parse_attributes_with(message, mode)?),
            Step::Relationships => Answer::Relationships(parse_relationships_with(
                message,
                self.config.relationship_separator,
                mode,
            )?),
            // Review and Generate take commands, not answers
            Step::Review | Step::Generate => return Err(ConversationError::SessionClosed),
        };
        Ok(answer)
    }

    async fn record_and_advance(
        &mut self,
        answer: Answer,
        progress: &dyn ProgressNotifier,
    ) -> Result<Turn, ConversationError> {
        let step = answer.step();
        self.answers.record(answer);
        info!("Recorded answer for {}", step);

        // Fixed order, also after a `change`: later answers may depend on this one
        let next = self.flow.next(step).unwrap_or(Step::Review);
        self.enter(next, progress).await;
        Ok(Turn::Prompt(self.render()))
    }

    async fn handle_review(
        &mut self,
        message: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<Turn, ConversationError> {
        let decision = parse_review_input(message, &self.flow).and_then(|decision| {
            let missing = self.answers.missing(&self.flow);
            if decision == ReviewDecision::Confirm && !missing.is_empty() {
                Err(ReviewInputError::Incomplete(missing))
            } else {
                Ok(decision)
            }
        });

        match decision {
            Ok(ReviewDecision::Confirm) => self.generate(progress).await,
            Ok(ReviewDecision::Change(step)) => {
                info!("Review: changing {}", step);
                self.answers.clear(step);
                self.enter(step, progress).await;
                Ok(Turn::Prompt(self.render()))
            }
            Err(e) => {
                warn!("Review input rejected: {}", e);
                self.logger.log(ConversationEvent::new(
                    "review_rejected",
                    json!({ "message": message, "reason": e.to_string() }),
                ));
                Err(e.into())
            }
        }
    }

    /// Enter `step`, opening an example exchange where one is offered
    async fn enter(&mut self, step: Step, progress: &dyn ProgressNotifier) {
        self.step = step;
        self.exchange = None;
        self.log_step_entered();

        if !self.config.suggest_examples {
            return;
        }
        if let Some(kind) = example_kind(step)
            && let Some(domain) = self.answers.domain()
        {
            let suggestions = self.suggester.execute(kind, domain, progress).await;
            if !suggestions.is_empty() {
                self.exchange = Some(ExampleExchange::new(kind, suggestions));
            }
        }
    }

    async fn generate(&mut self, progress: &dyn ProgressNotifier) -> Result<Turn, ConversationError> {
        let description = build_domain_description(&self.answers)?;

        self.step = Step::Generate;
        self.log_step_entered();
        self.description = Some(description.clone());
        self.generation_attempts += 1;
        self.logger.log(ConversationEvent::new(
            "generation_requested",
            json!({ "description": description }),
        ));

        let input = GenerateArtifactInput::new(description).with_naming(self.config.file_naming);
        match self.generator.execute_with_progress(input, progress).await {
            Ok(artifact) => {
                self.status = SessionStatus::Completed;
                self.logger.log(ConversationEvent::new(
                    "artifact_generated",
                    json!({
                        "file_name": artifact.file_name,
                        "bytes": artifact.content.len(),
                    }),
                ));
                self.artifact = Some(artifact.clone());
                Ok(Turn::Completed(artifact))
            }
            Err(e) => {
                self.status = SessionStatus::Failed;
                self.logger.log(ConversationEvent::new(
                    "generation_failed",
                    json!({ "error": e.to_string() }),
                ));
                let err = ConversationError::GenerationFailed(e);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn log_step_entered(&self) {
        debug!("Entering step {}", self.step);
        self.logger.log(ConversationEvent::new(
            "step_entered",
            json!({ "step": self.step }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::generate_artifact::GenerateArtifactError;
    use crate::use_cases::test_support::{MockGateway, RecordingLogger};
    use dslgen_domain::{DomainError, ParseMode, Relationship};

    fn session(gateway: &Arc<MockGateway>, config: ConversationConfig) -> ConversationSession<MockGateway> {
        ConversationSession::new(Arc::clone(gateway), config)
    }

    fn no_examples() -> ConversationConfig {
        ConversationConfig::default().with_examples(false)
    }

    async fn answer(session: &mut ConversationSession<MockGateway>, message: &str) -> Turn {
        session.submit(message, &NoProgress).await.unwrap()
    }

    /// Drive a session without examples to the Review step
    async fn at_review(gateway: &Arc<MockGateway>) -> ConversationSession<MockGateway> {
        let mut s = session(gateway, no_examples());
        s.start();
        answer(&mut s, "cycling").await;
        answer(&mut s, "Bike, Rider").await;
        answer(&mut s, "Bike (owned by) Rider").await;
        assert_eq!(s.step(), Step::Review);
        s
    }

    #[tokio::test]
    async fn test_end_to_end_generates_once() {
        let gateway = Arc::new(MockGateway::replying(&["```xml\n<ecore:EPackage name=\"cycling\"/>\n```"]));
        let mut s = session(&gateway, no_examples());

        let first = s.start();
        assert_eq!(first.step, Step::Domain);
        assert_eq!(first.position, (1, 5));

        let mut visited = vec![s.step()];
        for message in ["cycling", "Bike, Rider", "Bike (owned by) Rider"] {
            answer(&mut s, message).await;
            visited.push(s.step());
        }

        let turn = answer(&mut s, "confirm").await;
        visited.push(s.step());

        assert_eq!(
            visited,
            vec![
                Step::Domain,
                Step::Entities,
                Step::Relationships,
                Step::Review,
                Step::Generate
            ]
        );
        let Turn::Completed(artifact) = turn else {
            panic!("expected an artifact");
        };
        assert_eq!(artifact.content, "<ecore:EPackage name=\"cycling\"/>");
        assert_eq!(artifact.file_name, "cycling.ecore");
        assert_eq!(artifact.content_type, "application/xml");
        assert_eq!(s.status(), SessionStatus::Completed);
        assert_eq!(s.generation_attempts(), 1);

        let prompts = gateway.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("cycling"));
        assert!(prompts[0].contains("Bike, Rider"));
        assert!(prompts[0].contains("Bike (owned by) Rider"));
    }

    #[tokio::test]
    async fn test_review_render_carries_answers() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let s = at_review(&gateway).await;

        let render = s.render();
        let answers = render.answers.unwrap();
        assert_eq!(answers.domain(), Some("cycling"));
        assert_eq!(answers.entities().unwrap(), ["Bike", "Rider"]);
        assert!(render.instructions.contains("(domain, entities, relationships)"));
    }

    #[tokio::test]
    async fn test_change_entities_clears_and_returns() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let mut s = at_review(&gateway).await;

        let turn = answer(&mut s, "change entities").await;
        assert!(matches!(turn, Turn::Prompt(ref r) if r.step == Step::Entities));
        assert_eq!(s.step(), Step::Entities);
        assert!(!s.answers().contains(Step::Entities));
        assert!(s.answers().contains(Step::Relationships));

        // Relationships are asked again before Review
        answer(&mut s, "Bike, Rider, Race").await;
        assert_eq!(s.step(), Step::Relationships);
        assert_eq!(s.answers().entities().unwrap(), ["Bike", "Rider", "Race"]);
        answer(&mut s, "Rider (enters) Race").await;
        assert_eq!(s.step(), Step::Review);
    }

    #[tokio::test]
    async fn test_change_entities_reasks_attributes_and_relationships() {
        let gateway = Arc::new(MockGateway::replying(&["<ecore:EPackage/>"]));
        let mut s = session(&gateway, no_examples().with_attributes(true));
        s.start();
        answer(&mut s, "cycling").await;
        answer(&mut s, "Bike, Rider").await;
        answer(&mut s, "Bike: brand; Rider: name").await;
        answer(&mut s, "Bike (owned by) Rider").await;
        assert_eq!(s.step(), Step::Review);

        answer(&mut s, "change entities").await;
        answer(&mut s, "Car, Driver").await;
        assert_eq!(s.step(), Step::Attributes);
        answer(&mut s, "Car: make; Driver: licence").await;
        assert_eq!(s.step(), Step::Relationships);
        answer(&mut s, "Car (driven by) Driver").await;
        assert_eq!(s.step(), Step::Review);
        answer(&mut s, "confirm").await;

        let description = s.description().unwrap();
        assert_eq!(description.entity_names(), vec!["Car", "Driver"]);
        assert_eq!(
            description.relationships,
            vec![Relationship::new("Car", "driven by", "Driver")]
        );
        let prompts = gateway.prompts();
        assert!(!prompts[0].contains("Bike"));
    }

    #[tokio::test]
    async fn test_change_bogus_stays_at_review() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let mut s = at_review(&gateway).await;
        let before = s.answers().clone();

        let err = s.submit("change bogus", &NoProgress).await.unwrap_err();

        assert!(matches!(
            err,
            ConversationError::ReviewInputInvalid(ReviewInputError::UnknownCategory { .. })
        ));
        assert!(err.is_recoverable());
        assert_eq!(s.step(), Step::Review);
        assert_eq!(s.answers(), &before);
        assert!(gateway.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_requires_all_answers() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let mut s = at_review(&gateway).await;
        s.answers.clear(Step::Entities);

        let err = s.submit("confirm", &NoProgress).await.unwrap_err();
        assert_eq!(
            err,
            ConversationError::ReviewInputInvalid(ReviewInputError::Incomplete(vec![
                Step::Entities
            ]))
        );
        assert_eq!(s.step(), Step::Review);
        assert!(gateway.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_confirm_at_domain_step_is_a_domain_name() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let mut s = at_review(&gateway).await;

        answer(&mut s, "change domain").await;
        assert_eq!(s.step(), Step::Domain);
        answer(&mut s, "confirm").await;

        assert_eq!(s.answers().domain(), Some("confirm"));
        assert_eq!(s.step(), Step::Entities);
        assert!(gateway.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_keeps_state_until_reset() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::RequestFailed {
            status: 401,
            body: "unauthorized".to_string(),
        })]));
        let mut s = at_review(&gateway).await;

        let err = s.submit("confirm", &NoProgress).await.unwrap_err();
        assert!(matches!(
            err,
            ConversationError::GenerationFailed(GenerateArtifactError::GatewayError(
                GatewayError::RequestFailed { status: 401, .. }
            ))
        ));
        assert!(!err.is_recoverable());
        assert_eq!(s.status(), SessionStatus::Failed);
        assert_eq!(s.last_error(), Some(&err));

        // Answers and description survive the failure
        assert_eq!(s.answers().domain(), Some("cycling"));
        let description = s.description().unwrap();
        assert_eq!(description.domain, "cycling");
        assert_eq!(description.entity_names(), vec!["Bike", "Rider"]);
        assert_eq!(
            description.relationships,
            vec![Relationship::new("Bike", "owned by", "Rider")]
        );

        // Only reset is accepted now
        assert_eq!(
            s.submit("confirm", &NoProgress).await,
            Err(ConversationError::SessionClosed)
        );
        assert_eq!(gateway.prompts().len(), 1);

        let render = s.reset();
        assert_eq!(render.step, Step::Domain);
        assert_eq!(s.step(), Step::Domain);
        assert!(s.answers().is_empty());
        assert_eq!(s.status(), SessionStatus::Collecting);
        assert!(s.description().is_none());
        assert!(s.last_error().is_none());
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected_without_change() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let mut s = session(&gateway, no_examples());
        s.start();

        assert_eq!(
            s.submit("   ", &NoProgress).await,
            Err(ConversationError::EmptyAnswer)
        );
        assert_eq!(s.step(), Step::Domain);
        assert!(s.answers().is_empty());
    }

    #[tokio::test]
    async fn test_domain_keeps_first_word_lowercased() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let mut s = session(&gateway, no_examples());
        s.start();

        answer(&mut s, "Mountain Cycling").await;
        assert_eq!(s.answers().domain(), Some("mountain"));
    }

    #[tokio::test]
    async fn test_example_exchange_with_delta() {
        let gateway = Arc::new(MockGateway::replying(&[
            "Bike, Rider, Race",
            "Bike (owned by) Rider, Rider (enters) Race",
            "<ecore:EPackage/>",
        ]));
        let mut s = session(&gateway, ConversationConfig::default());
        s.start();

        let Turn::Prompt(render) = answer(&mut s, "cycling").await else {
            panic!("expected a prompt");
        };
        assert_eq!(render.step, Step::Entities);
        assert_eq!(render.suggestions, vec!["Bike", "Rider", "Race"]);
        assert!(render.instructions.contains("toAdd:"));

        // Delta stays on the step
        let Turn::Prompt(render) = answer(&mut s, "toAdd: Wheel; toRemove: Race").await else {
            panic!("expected a prompt");
        };
        assert_eq!(render.step, Step::Entities);
        assert_eq!(render.suggestions, vec!["Bike", "Rider", "Wheel"]);

        answer(&mut s, "accept").await;
        assert_eq!(s.answers().entities().unwrap(), ["Bike", "Rider", "Wheel"]);
        assert_eq!(s.step(), Step::Relationships);
        assert!(s.has_open_exchange());

        // A regular answer replaces the suggestions
        answer(&mut s, "Wheel (part of) Bike").await;
        assert_eq!(
            s.answers().relationships().unwrap(),
            [Relationship::new("Wheel", "part of", "Bike")]
        );
        assert!(!s.has_open_exchange());

        answer(&mut s, "confirm").await;
        let prompts = gateway.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].contains("examples of entities"));
        assert!(prompts[1].contains("examples of relationships"));
        assert!(prompts[2].contains("Bike, Rider, Wheel"));
        assert!(prompts[2].contains("Wheel (part of) Bike"));
    }

    #[tokio::test]
    async fn test_failed_suggestions_skip_exchange() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Timeout)]));
        let mut s = session(&gateway, ConversationConfig::default());
        s.start();

        let Turn::Prompt(render) = answer(&mut s, "cycling").await else {
            panic!("expected a prompt");
        };
        assert_eq!(render.step, Step::Entities);
        assert!(render.suggestions.is_empty());
        assert!(!s.has_open_exchange());
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_unparsable_relationship() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let config = no_examples().with_parse_mode(ParseMode::Strict);
        let mut s = session(&gateway, config);
        s.start();
        answer(&mut s, "cycling").await;
        answer(&mut s, "Bike, Rider").await;

        let err = s
            .submit("Bike (owned by) Rider\nno parens here", &NoProgress)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ConversationError::InvalidAnswer(DomainError::UnparsableLine {
                line: 2,
                content: "no parens here".to_string(),
            })
        );
        assert_eq!(s.step(), Step::Relationships);
        assert!(!s.answers().contains(Step::Relationships));
    }

    #[tokio::test]
    async fn test_lenient_mode_drops_unparsable_relationship() {
        let gateway = Arc::new(MockGateway::replying(&[]));
        let mut s = session(&gateway, no_examples());
        s.start();
        answer(&mut s, "cycling").await;
        answer(&mut s, "Bike, Rider").await;
        answer(&mut s, "Bike (owned by) Rider\nno parens here").await;

        assert_eq!(s.answers().relationships().unwrap().len(), 1);
        assert_eq!(s.step(), Step::Review);
    }

    #[tokio::test]
    async fn test_attribute_flow() {
        let gateway = Arc::new(MockGateway::replying(&["<ecore:EPackage/>"]));
        let config = no_examples().with_attributes(true);
        let mut s = session(&gateway, config);

        assert_eq!(s.start().position, (1, 6));
        answer(&mut s, "cycling").await;
        answer(&mut s, "Bike, Rider").await;
        assert_eq!(s.step(), Step::Attributes);
        answer(&mut s, "Bike: brand, weight; Rider: name").await;
        assert_eq!(s.step(), Step::Relationships);
        answer(&mut s, "Bike (owned by) Rider").await;
        answer(&mut s, "confirm").await;

        let prompts = gateway.prompts();
        assert!(prompts[0].contains("Attributes:"));
        assert!(prompts[0].contains("- Bike: brand, weight"));
        assert_eq!(s.description().unwrap().entities[0].attributes, vec!["brand", "weight"]);
    }

    #[tokio::test]
    async fn test_transcript_events() {
        let gateway = Arc::new(MockGateway::replying(&["<a/>"]));
        let logger = Arc::new(RecordingLogger::default());
        let mut s = session(&gateway, no_examples())
            .with_conversation_logger(Arc::clone(&logger) as Arc<dyn ConversationLogger>);

        s.start();
        answer(&mut s, "cycling").await;
        answer(&mut s, "Bike").await;
        answer(&mut s, "Bike (has) Bike").await;
        let _ = s.submit("nope", &NoProgress).await;
        answer(&mut s, "confirm").await;

        let events = logger.event_types();
        assert_eq!(events.first(), Some(&"session_started"));
        assert!(events.contains(&"user_message"));
        assert!(events.contains(&"review_rejected"));
        assert!(events.contains(&"generation_requested"));
        assert_eq!(events.last(), Some(&"artifact_generated"));
    }
}
